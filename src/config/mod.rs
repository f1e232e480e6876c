//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `FAIR_ASSESSMENT`
//! prefix and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use fair_assessment::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Backend at {}", config.api.base_url);
//! ```

mod api;
mod checks;
mod environment;
mod error;
mod logging;

pub use api::ApiConfig;
pub use checks::ChecksConfig;
pub use environment::Environment;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Backend API configuration (base URL, timeouts, paging)
    pub api: ApiConfig,

    /// Automated check configuration
    #[serde(default)]
    pub checks: ChecksConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Environment name
    #[serde(default)]
    pub environment: Environment,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FAIR_ASSESSMENT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `FAIR_ASSESSMENT__API__BASE_URL=...` -> `api.base_url = ...`
    /// - `FAIR_ASSESSMENT__CHECKS__TIMEOUT_SECS=30` -> `checks.timeout_secs = 30`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FAIR_ASSESSMENT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.api.validate(self.environment)?;
        self.checks.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
