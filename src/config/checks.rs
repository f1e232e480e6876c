//! Automated check configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Automated check configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChecksConfig {
    /// Upper bound for a single check, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Metadata validation mode used when a test names none
    #[serde(default = "default_metadata_mode")]
    pub metadata_mode: String,
}

impl ChecksConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate check configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.timeout_secs == 0 || self.timeout_secs > 600 {
            return Err(ValidationError::InvalidCheckTimeout);
        }
        if self.metadata_mode.trim().is_empty() {
            return Err(ValidationError::MissingRequired("CHECKS__METADATA_MODE"));
        }
        Ok(())
    }
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            metadata_mode: default_metadata_mode(),
        }
    }
}

fn default_timeout() -> u64 {
    60
}

fn default_metadata_mode() -> String {
    "oai-pmh".to_string()
}
