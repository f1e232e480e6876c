//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid API base URL format")]
    InvalidBaseUrl,

    #[error("API base URL must use HTTPS in production")]
    BaseUrlMustBeHttps,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid check timeout")]
    InvalidCheckTimeout,

    #[error("Page size must be between 1 and 500")]
    InvalidPageSize,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
