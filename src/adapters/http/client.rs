//! Shared request plumbing for the backend client.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::ports::{ApiError, BackendErrorBody, SessionContext};

/// Backend API client.
///
/// Holds one pooled `reqwest::Client`; cloning is cheap.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl HttpApiClient {
    /// Creates a client for `base_url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if the underlying HTTP client cannot be built
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Creates a client from the API configuration section.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::new(config.normalized_base_url(), config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path.
    pub(super) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Starts an authenticated request.
    pub(super) fn request(&self, ctx: &SessionContext, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, self.url(path))
            .bearer_auth(ctx.bearer_token())
            .header("Accept", "application/json")
    }

    /// Sends a request, mapping transport failures.
    pub(super) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        request.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    timeout_secs: self.timeout.as_secs(),
                }
            } else if e.is_connect() {
                ApiError::network(format!("Connection failed: {}", e))
            } else {
                ApiError::network(e.to_string())
            }
        })
    }

    /// Turns a non-success response into the matching `ApiError`.
    pub(super) async fn check_status(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<BackendErrorBody>(&body).ok();
        let error = ApiError::from_response(status.as_u16(), parsed);
        tracing::warn!(status = status.as_u16(), error = %error, "Backend request failed");
        Err(error)
    }

    /// Sends a request and decodes a JSON body.
    pub(super) async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.send(request).await?;
        let response = self.check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::parse(format!("Failed to parse response: {}", e)))
    }

    /// Sends a request whose body is ignored.
    pub(super) async fn send_empty(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = self.send(request).await?;
        self.check_status(response).await?;
        Ok(())
    }
}
