//! Backend API configuration

use secrecy::Secret;
use serde::Deserialize;
use std::time::Duration;

use super::environment::Environment;
use super::error::ValidationError;

/// Backend API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the assessment backend (e.g. `https://api.example.org`)
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Page size used when walking paginated listings
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Optional bearer token for non-interactive use
    #[serde(default)]
    pub access_token: Option<Secret<String>>,
}

impl ApiConfig {
    /// Create a configuration with defaults for everything but the base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout(),
            page_size: default_page_size(),
            access_token: None,
        }
    }

    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL without trailing slash
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate API configuration
    pub fn validate(&self, environment: Environment) -> Result<(), ValidationError> {
        if self.base_url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("API__BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if environment.is_production() && !self.base_url.starts_with("https://") {
            return Err(ValidationError::BaseUrlMustBeHttps);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ValidationError::InvalidTimeout);
        }
        if self.page_size == 0 || self.page_size > 500 {
            return Err(ValidationError::InvalidPageSize);
        }
        Ok(())
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> u32 {
    50
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_config_defaults() {
        let config = ApiConfig::new("https://api.example.org");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.page_size, 50);
        assert!(config.access_token.is_none());
    }

    #[test]
    fn test_normalized_base_url() {
        let config = ApiConfig::new("https://api.example.org/");
        assert_eq!(config.normalized_base_url(), "https://api.example.org");
    }

    #[test]
    fn test_validation_rejects_bad_url() {
        let config = ApiConfig::new("api.example.org");
        assert_eq!(
            config.validate(Environment::Development),
            Err(ValidationError::InvalidBaseUrl)
        );
    }

    #[test]
    fn test_validation_requires_https_in_production() {
        let config = ApiConfig::new("http://localhost:8080");
        assert!(config.validate(Environment::Development).is_ok());
        assert_eq!(
            config.validate(Environment::Production),
            Err(ValidationError::BaseUrlMustBeHttps)
        );
    }

    #[test]
    fn test_validation_limits() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..ApiConfig::new("https://api.example.org")
        };
        assert_eq!(
            config.validate(Environment::Development),
            Err(ValidationError::InvalidTimeout)
        );

        let config = ApiConfig {
            page_size: 1000,
            ..ApiConfig::new("https://api.example.org")
        };
        assert_eq!(
            config.validate(Environment::Development),
            Err(ValidationError::InvalidPageSize)
        );
    }
}
