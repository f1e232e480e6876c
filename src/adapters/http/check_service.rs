//! `AutomatedCheckService` over the `/v1/automated/*` endpoints.

use async_trait::async_trait;
use reqwest::Method;
use serde::{Deserialize, Serialize};

use super::client::HttpApiClient;
use crate::domain::checks::{CheckOutcome, CheckRequest};
use crate::ports::{ApiError, AutomatedCheckService, SessionContext};

#[derive(Debug, Serialize)]
struct UrlCheckBody<'a> {
    url: &'a str,
}

#[derive(Debug, Serialize)]
struct MetadataCheckBody<'a> {
    metadata_url: &'a str,
}

#[derive(Debug, Serialize)]
struct AarcCheckBody<'a> {
    aai_provider_id: &'a str,
}

/// `check-url` response.
#[derive(Debug, Deserialize)]
pub(super) struct UrlCheckResponse {
    #[serde(default)]
    code: Option<u16>,
    is_valid_https: bool,
    #[serde(default)]
    message: Option<String>,
}

/// `validate-metadata/{mode}` response.
#[derive(Debug, Deserialize)]
pub(super) struct MetadataCheckResponse {
    #[serde(default)]
    code: Option<u16>,
    is_valid: bool,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AarcTestStatus {
    is_valid: bool,
    #[serde(default)]
    message: Option<String>,
}

/// `aarc-g069` response. Only the verdict in `test_status` is read.
#[derive(Debug, Deserialize)]
pub(super) struct AarcCheckResponse {
    test_status: AarcTestStatus,
}

/// A verdict is only trusted when the embedded code is absent or 2xx.
fn verdict(code: Option<u16>, valid: bool, message: Option<String>) -> Result<CheckOutcome, ApiError> {
    match code {
        Some(code) if !(200..300).contains(&code) => Err(ApiError::backend(
            code,
            message.unwrap_or_else(|| format!("check returned code {}", code)),
        )),
        _ => Ok(CheckOutcome::from_verdict(valid, message)),
    }
}

impl UrlCheckResponse {
    pub(super) fn into_outcome(self) -> Result<CheckOutcome, ApiError> {
        verdict(self.code, self.is_valid_https, self.message)
    }
}

impl MetadataCheckResponse {
    pub(super) fn into_outcome(self) -> Result<CheckOutcome, ApiError> {
        verdict(self.code, self.is_valid, self.message)
    }
}

impl AarcCheckResponse {
    pub(super) fn into_outcome(self) -> Result<CheckOutcome, ApiError> {
        verdict(None, self.test_status.is_valid, self.test_status.message)
    }
}

#[async_trait]
impl AutomatedCheckService for HttpApiClient {
    async fn run_check(
        &self,
        ctx: &SessionContext,
        request: &CheckRequest,
    ) -> Result<CheckOutcome, ApiError> {
        tracing::debug!(check = request.label(), "Running automated check");

        let outcome = match request {
            CheckRequest::HttpsUrl { url } => {
                let response: UrlCheckResponse = self
                    .send_json(
                        self.request(ctx, Method::POST, "/v1/automated/check-url")
                            .json(&UrlCheckBody { url }),
                    )
                    .await?;
                response.into_outcome()
            }
            CheckRequest::Metadata { mode, metadata_url } => {
                let response: MetadataCheckResponse = self
                    .send_json(
                        self.request(
                            ctx,
                            Method::POST,
                            &format!("/v1/automated/validate-metadata/{}", mode),
                        )
                        .json(&MetadataCheckBody { metadata_url }),
                    )
                    .await?;
                response.into_outcome()
            }
            CheckRequest::AarcG069 { aai_provider_id } => {
                let response: AarcCheckResponse = self
                    .send_json(
                        self.request(ctx, Method::POST, "/v1/automated/aarc-g069")
                            .json(&AarcCheckBody { aai_provider_id }),
                    )
                    .await?;
                response.into_outcome()
            }
        }?;

        tracing::debug!(check = request.label(), result = ?outcome.result(), "Automated check finished");
        Ok(outcome)
    }
}
