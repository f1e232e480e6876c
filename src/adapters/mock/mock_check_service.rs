//! Mock automated check service for testing.
//!
//! Responses can be bound to a specific request or queued for whatever
//! request comes next. Unmatched requests pass. Every call is recorded.
//!
//! # Example
//!
//! ```ignore
//! let service = MockCheckService::new()
//!     .with_response_for(slow_request, MockCheckResponse::passed().with_delay(Duration::from_secs(1)))
//!     .with_response(MockCheckResponse::error(ApiError::network("down")));
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::checks::{CheckOutcome, CheckRequest};
use crate::ports::{ApiError, AutomatedCheckService, SessionContext};

/// A configured mock response.
#[derive(Debug, Clone)]
pub struct MockCheckResponse {
    result: Result<CheckOutcome, ApiError>,
    delay: Duration,
}

impl MockCheckResponse {
    pub fn outcome(outcome: CheckOutcome) -> Self {
        Self {
            result: Ok(outcome),
            delay: Duration::ZERO,
        }
    }

    pub fn passed() -> Self {
        Self::outcome(CheckOutcome::passed(None))
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self::outcome(CheckOutcome::failed(Some(message.into())))
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            result: Err(error),
            delay: Duration::ZERO,
        }
    }

    /// Simulated latency before the response is returned.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Mock automated check service.
#[derive(Debug, Clone, Default)]
pub struct MockCheckService {
    bound: Arc<Mutex<Vec<(CheckRequest, MockCheckResponse)>>>,
    queued: Arc<Mutex<VecDeque<MockCheckResponse>>>,
    calls: Arc<Mutex<Vec<CheckRequest>>>,
}

impl MockCheckService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers every call for `request` with `response`.
    pub fn with_response_for(self, request: CheckRequest, response: MockCheckResponse) -> Self {
        self.bound.lock().unwrap().push((request, response));
        self
    }

    /// Queues a response for the next call without a bound response.
    pub fn with_response(self, response: MockCheckResponse) -> Self {
        self.queued.lock().unwrap().push_back(response);
        self
    }

    /// Requests received so far, in call order.
    pub fn calls(&self) -> Vec<CheckRequest> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn next_response(&self, request: &CheckRequest) -> MockCheckResponse {
        let bound = self
            .bound
            .lock()
            .unwrap()
            .iter()
            .find(|(r, _)| r == request)
            .map(|(_, response)| response.clone());

        bound
            .or_else(|| self.queued.lock().unwrap().pop_front())
            .unwrap_or_else(MockCheckResponse::passed)
    }
}

#[async_trait]
impl AutomatedCheckService for MockCheckService {
    async fn run_check(
        &self,
        _ctx: &SessionContext,
        request: &CheckRequest,
    ) -> Result<CheckOutcome, ApiError> {
        self.calls.lock().unwrap().push(request.clone());
        let response = self.next_response(request);

        if !response.delay.is_zero() {
            sleep(response.delay).await;
        }
        response.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::TestResult;

    fn url(url: &str) -> CheckRequest {
        CheckRequest::HttpsUrl {
            url: url.to_string(),
        }
    }

    #[tokio::test]
    async fn unmatched_request_passes() {
        let service = MockCheckService::new();
        let outcome = service
            .run_check(&SessionContext::new("t"), &url("https://a.example.org"))
            .await
            .unwrap();
        assert_eq!(outcome.result(), TestResult::Pass);
        assert_eq!(service.call_count(), 1);
    }

    #[tokio::test]
    async fn bound_response_wins_over_queue() {
        let service = MockCheckService::new()
            .with_response_for(url("http://plain.example.org"), MockCheckResponse::failed("not https"))
            .with_response(MockCheckResponse::error(ApiError::network("down")));
        let ctx = SessionContext::new("t");

        let bound = service.run_check(&ctx, &url("http://plain.example.org")).await;
        assert_eq!(bound.unwrap().result(), TestResult::Fail);

        let queued = service.run_check(&ctx, &url("https://other.example.org")).await;
        assert!(matches!(queued, Err(ApiError::Network(_))));
        assert_eq!(service.calls().len(), 2);
    }
}
