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
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Concurrency limit must be greater than zero")]
    InvalidConcurrencyLimit,

    #[error("Invalid identity provider URL: {0}")]
    InvalidIdentityUrl(String),

    #[error("Identity provider URL must use HTTPS in production")]
    IdentityUrlMustBeHttps,

    #[error("Invalid identity provider timeout")]
    InvalidIdentityTimeout,

    #[error(
        "Identity provider timeout ({identity_secs}s) must be shorter than the request timeout ({request_secs}s)"
    )]
    IdentityTimeoutExceedsRequestTimeout {
        identity_secs: u64,
        request_secs: u64,
    },

    #[error("Custom token lifetime must be between 1 and 3600 seconds")]
    InvalidTokenTtl,
}
