//! Token issuer configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Upper bound the platform accepts for custom token lifetime.
pub const MAX_TOKEN_TTL_SECS: u64 = 3600;

/// Custom token issuer configuration (service account credential)
#[derive(Debug, Clone, Deserialize)]
pub struct IssuerConfig {
    /// Path to the service account JSON key file
    #[serde(default = "default_service_account_path")]
    pub service_account_path: PathBuf,

    /// Lifetime of minted custom tokens in seconds
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,
}

impl IssuerConfig {
    /// Get token lifetime as Duration
    pub fn token_ttl(&self) -> Duration {
        Duration::from_secs(self.token_ttl_secs)
    }

    /// Validate issuer configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.service_account_path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("ISSUER__SERVICE_ACCOUNT_PATH"));
        }
        if self.token_ttl_secs == 0 || self.token_ttl_secs > MAX_TOKEN_TTL_SECS {
            return Err(ValidationError::InvalidTokenTtl);
        }
        Ok(())
    }
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            service_account_path: default_service_account_path(),
            token_ttl_secs: default_token_ttl(),
        }
    }
}

fn default_service_account_path() -> PathBuf {
    PathBuf::from("config/service-account.json")
}

fn default_token_ttl() -> u64 {
    MAX_TOKEN_TTL_SECS
}
