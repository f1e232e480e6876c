//! CheckRunner - cancellable automated checks keyed by test id.
//!
//! Each run is spawned on the tokio runtime and stamped with a fresh
//! [`CheckRunId`]. Starting a run for a test that already has one in flight
//! aborts the previous task, and a completion is only delivered while its
//! run id is still the current one for the test. The last requested run
//! therefore wins regardless of the order in which responses arrive.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::domain::assessment::TestPath;
use crate::domain::checks::{CheckOutcome, CheckRequest};
use crate::domain::foundation::{CheckRunId, TestId};
use crate::ports::{AutomatedCheckService, SessionContext};

/// A finished run, ready to be applied to the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckCompletion {
    pub run_id: CheckRunId,
    pub path: TestPath,
    /// The input the check was run on.
    pub request: CheckRequest,
    pub outcome: CheckOutcome,
}

type RunTable = HashMap<TestId, (CheckRunId, AbortHandle)>;

fn lock(runs: &Mutex<RunTable>) -> MutexGuard<'_, RunTable> {
    runs.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Spawns automated checks and tracks the in-flight run per test.
pub struct CheckRunner {
    service: Arc<dyn AutomatedCheckService>,
    ctx: SessionContext,
    timeout: Duration,
    runs: Arc<Mutex<RunTable>>,
    sender: mpsc::UnboundedSender<CheckCompletion>,
}

impl CheckRunner {
    /// Creates a runner and the receiving end of its completion channel.
    pub fn new(
        service: Arc<dyn AutomatedCheckService>,
        ctx: SessionContext,
        timeout: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<CheckCompletion>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let runner = Self {
            service,
            ctx,
            timeout,
            runs: Arc::new(Mutex::new(HashMap::new())),
            sender,
        };
        (runner, receiver)
    }

    /// Starts a run for the test at `path`, superseding any run in flight
    /// for the same test.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&self, path: TestPath, request: CheckRequest) -> CheckRunId {
        let run_id = CheckRunId::new();
        let test_id = path.test.clone();

        // Held until the new handle is registered so the task cannot
        // complete against a table that does not know it yet.
        let mut runs = lock(&self.runs);
        if let Some((previous, handle)) = runs.remove(&test_id) {
            handle.abort();
            tracing::info!(test_id = %test_id, previous_run = %previous, "Superseded in-flight check");
        }

        tracing::info!(test_id = %test_id, run_id = %run_id, check = request.label(), "Starting automated check");

        let service = Arc::clone(&self.service);
        let ctx = self.ctx.clone();
        let timeout = self.timeout;
        let table = Arc::clone(&self.runs);
        let sender = self.sender.clone();

        let task = tokio::spawn(async move {
            let outcome = match tokio::time::timeout(timeout, service.run_check(&ctx, &request)).await {
                Ok(Ok(outcome)) => outcome,
                Ok(Err(err)) => {
                    tracing::warn!(test_id = %path.test, run_id = %run_id, error = %err, "Automated check failed");
                    CheckOutcome::errored(err.to_string())
                }
                Err(_) => {
                    tracing::warn!(test_id = %path.test, run_id = %run_id, "Automated check timed out");
                    CheckOutcome::errored(format!("check timed out after {}s", timeout.as_secs()))
                }
            };

            let mut runs = lock(&table);
            let current = runs.get(&path.test).map(|(id, _)| *id) == Some(run_id);
            if !current {
                tracing::debug!(test_id = %path.test, run_id = %run_id, "Discarding stale check completion");
                return;
            }

            let test_id = path.test.clone();
            // Sent before the entry is removed: once `is_running` turns false
            // the completion is already queued.
            if sender
                .send(CheckCompletion {
                    run_id,
                    path,
                    request,
                    outcome,
                })
                .is_err()
            {
                tracing::debug!(test_id = %test_id, "Completion receiver dropped");
            }
            runs.remove(&test_id);
        });

        runs.insert(test_id, (run_id, task.abort_handle()));
        run_id
    }

    /// Aborts the run in flight for `test_id`. Returns whether one existed.
    pub fn cancel(&self, test_id: &TestId) -> bool {
        match lock(&self.runs).remove(test_id) {
            Some((run_id, handle)) => {
                handle.abort();
                tracing::info!(test_id = %test_id, run_id = %run_id, "Cancelled automated check");
                true
            }
            None => false,
        }
    }

    /// Aborts every run in flight.
    pub fn cancel_all(&self) {
        for (_, (_, handle)) in lock(&self.runs).drain() {
            handle.abort();
        }
    }

    /// The "check running" state of a test.
    pub fn is_running(&self, test_id: &TestId) -> bool {
        lock(&self.runs).contains_key(test_id)
    }

    pub fn has_running(&self) -> bool {
        !lock(&self.runs).is_empty()
    }

    /// Run id currently in flight for a test.
    pub fn current_run(&self, test_id: &TestId) -> Option<CheckRunId> {
        lock(&self.runs).get(test_id).map(|(id, _)| *id)
    }
}

impl Drop for CheckRunner {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{MockCheckResponse, MockCheckService};
    use crate::domain::assessment::fixtures::path;
    use crate::domain::assessment::TestResult;
    use crate::ports::ApiError;

    fn url(url: &str) -> CheckRequest {
        CheckRequest::HttpsUrl {
            url: url.to_string(),
        }
    }

    fn runner(service: MockCheckService) -> (CheckRunner, mpsc::UnboundedReceiver<CheckCompletion>) {
        CheckRunner::new(Arc::new(service), SessionContext::new("token"), Duration::from_secs(5))
    }

    #[tokio::test]
    async fn completion_is_delivered() {
        let (runner, mut completions) = runner(MockCheckService::new());
        let run_id = runner.start(path("P2", "C4", "T5"), url("https://example.org"));

        let completion = completions.recv().await.unwrap();
        assert_eq!(completion.run_id, run_id);
        assert_eq!(completion.outcome.result(), TestResult::Pass);
        assert!(!runner.is_running(&completion.path.test));
    }

    #[tokio::test]
    async fn newer_run_supersedes_slow_older_run() {
        let service = MockCheckService::new()
            .with_response_for(
                url("https://slow.example.org"),
                MockCheckResponse::passed().with_delay(Duration::from_millis(300)),
            )
            .with_response_for(url("http://fast.example.org"), MockCheckResponse::failed("not https"));
        let (runner, mut completions) = runner(service);

        let first = runner.start(path("P2", "C4", "T5"), url("https://slow.example.org"));
        let second = runner.start(path("P2", "C4", "T5"), url("http://fast.example.org"));
        assert_ne!(first, second);
        assert_eq!(runner.current_run(&TestId::new("T5").unwrap()), Some(second));

        let completion = completions.recv().await.unwrap();
        assert_eq!(completion.run_id, second);
        assert_eq!(completion.outcome.result(), TestResult::Fail);

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert!(completions.try_recv().is_err());
    }

    #[tokio::test]
    async fn cancelled_run_never_completes() {
        let service = MockCheckService::new()
            .with_response(MockCheckResponse::passed().with_delay(Duration::from_millis(100)));
        let (runner, mut completions) = runner(service);
        let test_id = TestId::new("T5").unwrap();

        runner.start(path("P2", "C4", "T5"), url("https://example.org"));
        assert!(runner.is_running(&test_id));
        assert!(runner.cancel(&test_id));
        assert!(!runner.is_running(&test_id));
        assert!(!runner.cancel(&test_id));

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(completions.try_recv().is_err());
    }

    #[tokio::test]
    async fn service_error_becomes_errored_outcome() {
        let service = MockCheckService::new()
            .with_response(MockCheckResponse::error(ApiError::network("connection refused")));
        let (runner, mut completions) = runner(service);

        runner.start(path("P2", "C4", "T5"), url("https://example.org"));
        let completion = completions.recv().await.unwrap();
        assert_eq!(completion.outcome.result(), TestResult::CheckFailed);
        assert!(completion
            .outcome
            .message()
            .is_some_and(|m| m.contains("connection refused")));
    }

    #[tokio::test]
    async fn slow_check_times_out() {
        let service = MockCheckService::new()
            .with_response(MockCheckResponse::passed().with_delay(Duration::from_secs(5)));
        let (runner, mut completions) = CheckRunner::new(
            Arc::new(service),
            SessionContext::new("token"),
            Duration::from_millis(50),
        );

        runner.start(path("P2", "C4", "T5"), url("https://example.org"));
        let completion = completions.recv().await.unwrap();
        assert_eq!(completion.outcome.result(), TestResult::CheckFailed);
    }

    #[tokio::test]
    async fn runs_for_different_tests_are_independent() {
        let (runner, mut completions) = runner(MockCheckService::new());
        runner.start(path("P2", "C4", "T5"), url("https://a.example.org"));
        runner.start(path("P2", "C4", "T6"), url("https://b.example.org"));

        let mut seen = vec![
            completions.recv().await.unwrap().path.test,
            completions.recv().await.unwrap().path.test,
        ];
        seen.sort();
        assert_eq!(seen, vec![TestId::new("T5").unwrap(), TestId::new("T6").unwrap()]);
    }
}
