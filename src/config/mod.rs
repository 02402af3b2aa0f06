//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DECISION_ANATOMY` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use decision_anatomy::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! config.telemetry.init_tracing().expect("Failed to install logging");
//! ```

mod error;
mod telemetry;
mod wizard;

pub use error::{ConfigError, ValidationError};
pub use telemetry::{LogFormat, TelemetryConfig};
pub use wizard::{WizardConfig, MAX_REQUIRED_DOMAINS};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Wizard tunables (domain count, default rating)
    #[serde(default)]
    pub wizard: WizardConfig,

    /// Logging filter and format
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DECISION_ANATOMY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DECISION_ANATOMY__WIZARD__REQUIRED_DOMAINS=4` -> `wizard.required_domains = 4`
    /// - `DECISION_ANATOMY__TELEMETRY__FORMAT=json` -> `telemetry.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DECISION_ANATOMY")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.wizard.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
