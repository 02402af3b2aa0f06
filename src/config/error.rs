//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Tracing subscriber could not be installed: {0}")]
    TracingInit(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required domain count must be between 1 and {max}, got {actual}")]
    InvalidDomainCount { max: usize, actual: usize },

    #[error("Default rating must be between 1 and 10, got {0}")]
    InvalidDefaultRating(i64),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
