//! Identity provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use super::server::Environment;

/// Configuration for the external identity provider (the web team's login API)
#[derive(Debug, Clone, Deserialize)]
pub struct IdentityConfig {
    /// Base URL of the provider API; `login` is appended to it
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl IdentityConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate identity provider configuration
    ///
    /// The base URL must end with `/` because endpoint paths are appended
    /// verbatim. In production, HTTPS is required.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("IDENTITY__BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidIdentityUrl(self.base_url.clone()));
        }
        if !self.base_url.ends_with('/') {
            return Err(ValidationError::InvalidIdentityUrl(self.base_url.clone()));
        }
        if *environment == Environment::Production && !self.base_url.starts_with("https://") {
            return Err(ValidationError::IdentityUrlMustBeHttps);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidIdentityTimeout);
        }
        Ok(())
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "https://roboticsir.in/server/api/v1/".to_string()
}

fn default_timeout() -> u64 {
    10
}
