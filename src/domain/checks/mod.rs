//! Automated checks - remote validations behind the `auto-*` test variants.
//!
//! A check is described by a [`CheckRequest`] built from the test's input and
//! resolves to a [`CheckOutcome`]. An outcome that could not be evaluated maps
//! to `TestResult::CheckFailed`, distinct from both fail and unanswered.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{Test, TestKind, TestResult};
use crate::domain::foundation::ValidationError;

/// A remote check to run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum CheckRequest {
    /// `POST /v1/automated/check-url`
    HttpsUrl { url: String },
    /// `POST /v1/automated/validate-metadata/{mode}`
    Metadata { mode: String, metadata_url: String },
    /// `POST /v1/automated/aarc-g069`
    AarcG069 { aai_provider_id: String },
}

impl CheckRequest {
    /// Builds the request for an automated test.
    ///
    /// `default_mode` is used for metadata tests that do not name a mode.
    ///
    /// # Errors
    ///
    /// - `AnswerMismatch` if the test is not automated
    /// - `EmptyField` if the test's input has not been filled in
    pub fn for_test(test: &Test, default_mode: &str) -> Result<Self, ValidationError> {
        let required = |value: &Option<String>, field: &str| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .ok_or_else(|| ValidationError::empty_field(field))
        };

        match &test.kind {
            TestKind::AutoCheckUrl(t) => Ok(CheckRequest::HttpsUrl {
                url: required(&t.url, "url")?,
            }),
            TestKind::AutoValidateMetadata(t) => Ok(CheckRequest::Metadata {
                mode: t
                    .mode
                    .clone()
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| default_mode.to_string()),
                metadata_url: required(&t.metadata_url, "metadata_url")?,
            }),
            TestKind::AutoAarcG069(t) => Ok(CheckRequest::AarcG069 {
                aai_provider_id: required(&t.aai_provider_id, "aai_provider_id")?,
            }),
            _ => Err(ValidationError::answer_mismatch("check", test.type_name())),
        }
    }

    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            CheckRequest::HttpsUrl { .. } => "check-url",
            CheckRequest::Metadata { .. } => "validate-metadata",
            CheckRequest::AarcG069 { .. } => "aarc-g069",
        }
    }
}

/// Resolution of a remote check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CheckOutcome {
    Passed { message: Option<String> },
    Failed { message: Option<String> },
    /// The backend call itself failed.
    Errored { message: String },
}

impl CheckOutcome {
    pub fn passed(message: Option<String>) -> Self {
        CheckOutcome::Passed { message }
    }

    pub fn failed(message: Option<String>) -> Self {
        CheckOutcome::Failed { message }
    }

    pub fn errored(message: impl Into<String>) -> Self {
        CheckOutcome::Errored {
            message: message.into(),
        }
    }

    /// Builds an outcome from the backend verdict.
    pub fn from_verdict(valid: bool, message: Option<String>) -> Self {
        if valid {
            Self::passed(message)
        } else {
            Self::failed(message)
        }
    }

    pub fn result(&self) -> TestResult {
        match self {
            CheckOutcome::Passed { .. } => TestResult::Pass,
            CheckOutcome::Failed { .. } => TestResult::Fail,
            CheckOutcome::Errored { .. } => TestResult::CheckFailed,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            CheckOutcome::Passed { message } | CheckOutcome::Failed { message } => {
                message.as_deref()
            }
            CheckOutcome::Errored { message } => Some(message),
        }
    }

    /// Returns a copy of `test` carrying this outcome.
    ///
    /// # Errors
    ///
    /// - `AnswerMismatch` if the test is not automated
    pub fn apply_to(&self, test: &Test) -> Result<Test, ValidationError> {
        let mut next = test.clone();
        let message = self.message().map(str::to_string);
        match &mut next.kind {
            TestKind::AutoCheckUrl(t) => t.message = message,
            TestKind::AutoValidateMetadata(t) => t.message = message,
            TestKind::AutoAarcG069(t) => t.message = message,
            _ => return Err(ValidationError::answer_mismatch("check-outcome", test.type_name())),
        }
        next.result = Some(self.result());
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{MetadataCheckTest, ProviderCheckTest};
    use crate::domain::foundation::TestId;

    fn metadata_test(mode: Option<&str>, url: Option<&str>) -> Test {
        Test::new(
            TestId::new("T1").unwrap(),
            "Metadata",
            TestKind::AutoValidateMetadata(MetadataCheckTest {
                mode: mode.map(str::to_string),
                metadata_url: url.map(str::to_string),
                ..Default::default()
            }),
        )
    }

    #[test]
    fn metadata_request_falls_back_to_default_mode() {
        let request = CheckRequest::for_test(&metadata_test(None, Some("https://md.org")), "oai-pmh").unwrap();
        assert_eq!(
            request,
            CheckRequest::Metadata {
                mode: "oai-pmh".to_string(),
                metadata_url: "https://md.org".to_string()
            }
        );

        let request =
            CheckRequest::for_test(&metadata_test(Some("datacite"), Some("https://md.org")), "oai-pmh").unwrap();
        assert!(matches!(request, CheckRequest::Metadata { ref mode, .. } if mode == "datacite"));
    }

    #[test]
    fn missing_input_is_an_empty_field() {
        let err = CheckRequest::for_test(&metadata_test(None, Some("  ")), "oai-pmh").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("metadata_url"));

        let provider = Test::new(
            TestId::new("T2").unwrap(),
            "G069",
            TestKind::AutoAarcG069(ProviderCheckTest::default()),
        );
        let err = CheckRequest::for_test(&provider, "oai-pmh").unwrap_err();
        assert_eq!(err, ValidationError::empty_field("aai_provider_id"));
    }

    #[test]
    fn outcomes_map_to_results() {
        assert_eq!(CheckOutcome::from_verdict(true, None).result(), TestResult::Pass);
        assert_eq!(CheckOutcome::from_verdict(false, None).result(), TestResult::Fail);
        assert_eq!(CheckOutcome::errored("boom").result(), TestResult::CheckFailed);
    }

    #[test]
    fn apply_records_result_and_message() {
        let test = metadata_test(None, Some("https://md.org"));
        let checked = CheckOutcome::failed(Some("not OAI-PMH".to_string()))
            .apply_to(&test)
            .unwrap();
        assert_eq!(checked.result, Some(TestResult::Fail));
        match checked.kind {
            TestKind::AutoValidateMetadata(t) => assert_eq!(t.message.as_deref(), Some("not OAI-PMH")),
            other => panic!("unexpected kind {:?}", other),
        }
    }
}
