//! Errors returned by the backend API ports.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Error payload the backend returns with non-success responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
}

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered with an error payload.
    #[error("backend error {status}: {message}")]
    Backend {
        /// HTTP status (or the payload's own code).
        status: u16,
        /// Message from the payload.
        message: String,
    },

    /// Missing or rejected bearer token.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Transport failure before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Response body did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// The request could not be built.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    /// Creates a backend error.
    pub fn backend(status: u16, message: impl Into<String>) -> Self {
        Self::Backend {
            status,
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Maps a status code and error payload to the matching variant.
    pub fn from_response(status: u16, body: Option<BackendErrorBody>) -> Self {
        let message = body
            .as_ref()
            .map(|b| b.message.clone())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {}", status));

        match status {
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::Backend {
                status: body.and_then(|b| b.code).unwrap_or(status),
                message,
            },
        }
    }

    /// The `{code, message}` pair handed to the presentation layer.
    pub fn to_body(&self) -> BackendErrorBody {
        let code = match self {
            ApiError::Backend { status, .. } => Some(*status),
            ApiError::Unauthorized(_) => Some(401),
            ApiError::Forbidden(_) => Some(403),
            ApiError::NotFound(_) => Some(404),
            ApiError::Timeout { .. } => Some(408),
            _ => None,
        };
        let message = match self {
            ApiError::Backend { message, .. }
            | ApiError::Unauthorized(message)
            | ApiError::Forbidden(message)
            | ApiError::NotFound(message) => message.clone(),
            other => other.to_string(),
        };
        BackendErrorBody { code, message }
    }
}

impl From<ApiError> for DomainError {
    fn from(err: ApiError) -> Self {
        let code = match &err {
            ApiError::Unauthorized(_) => ErrorCode::Unauthorized,
            ApiError::Forbidden(_) => ErrorCode::Forbidden,
            ApiError::NotFound(_) => ErrorCode::AssessmentNotFound,
            ApiError::Network(_) | ApiError::Timeout { .. } => ErrorCode::NetworkError,
            ApiError::Backend { .. } => ErrorCode::BackendError,
            ApiError::Parse(_) | ApiError::InvalidRequest(_) => ErrorCode::InternalError,
        };
        DomainError::new(code, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_response_maps_auth_statuses() {
        assert!(matches!(ApiError::from_response(401, None), ApiError::Unauthorized(_)));
        assert!(matches!(ApiError::from_response(403, None), ApiError::Forbidden(_)));
        assert!(matches!(ApiError::from_response(404, None), ApiError::NotFound(_)));
    }

    #[test]
    fn from_response_keeps_backend_payload() {
        let body = BackendErrorBody {
            code: Some(409),
            message: "Assessment already exists".to_string(),
        };
        let err = ApiError::from_response(409, Some(body.clone()));
        assert_eq!(err, ApiError::backend(409, "Assessment already exists"));
        assert_eq!(err.to_body(), body);
    }

    #[test]
    fn from_response_without_message_uses_status() {
        let err = ApiError::from_response(502, None);
        assert_eq!(err.to_string(), "backend error 502: HTTP 502");
    }

    #[test]
    fn converts_to_domain_error() {
        let err: DomainError = ApiError::network("connection refused").into();
        assert_eq!(err.code, ErrorCode::NetworkError);
    }
}
