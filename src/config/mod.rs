//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `AUTH_PROXY` prefix and nested values use double underscores as separators.
//! The bare `PORT` variable, when set, overrides `server.port`.
//!
//! # Example
//!
//! ```no_run
//! use auth_proxy::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod error;
mod identity;
mod issuer;
mod server;

pub use error::{ConfigError, ValidationError};
pub use identity::IdentityConfig;
pub use issuer::{IssuerConfig, MAX_TOKEN_TTL_SECS};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every section has defaults, so an empty environment yields a usable
/// development configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, limits)
    #[serde(default)]
    pub server: ServerConfig,

    /// External identity provider (login API)
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Custom token issuer (service account credential)
    #[serde(default)]
    pub issuer: IssuerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `AUTH_PROXY` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Applies `PORT` as an override for `server.port`
    ///
    /// # Environment Variable Format
    ///
    /// - `AUTH_PROXY__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `AUTH_PROXY__IDENTITY__BASE_URL=...` -> `identity.base_url = ...`
    /// - `PORT=8080` -> `server.port = 8080`
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
                    .prefix("AUTH_PROXY")
                    .separator("__"),
            )
            .set_override_option("server.port", std::env::var("PORT").ok())?
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration and validate it in one step.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::LoadError` if values cannot be parsed and
    /// `ConfigError::ValidationFailed` if they are semantically invalid.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// The outbound identity call must time out before the request does, so
    /// a slow provider surfaces as a JSON error rather than a bare `408`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.identity.validate(&self.server.environment)?;
        self.issuer.validate()?;

        if self.identity.timeout_secs >= self.server.request_timeout_secs {
            return Err(ValidationError::IdentityTimeoutExceedsRequestTimeout {
                identity_secs: self.identity.timeout_secs,
                request_secs: self.server.request_timeout_secs,
            });
        }
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
