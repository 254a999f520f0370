//! Web API identity provider - calls the web team's login endpoint.
//!
//! # Wire contract
//!
//! `POST <base_url>login` with JSON `{"email", "password"}`. A successful
//! response carries `{"user": {"uid", "name", "profileInfo", ...}}`. Error
//! responses may carry `{"error": "<message>"}`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = WebApiConfig::new("https://roboticsir.in/server/api/v1/")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let provider = WebApiIdentityProvider::new(config)?;
//! let user = provider.login(&credentials).await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::config::IdentityConfig;
use crate::domain::login::{Credentials, UserRecord};
use crate::ports::{IdentityError, IdentityProvider};

/// Configuration for the web API identity provider.
#[derive(Debug, Clone)]
pub struct WebApiConfig {
    /// Base URL; endpoint names are appended verbatim.
    pub base_url: String,
    /// Timeout for the whole outbound request.
    pub timeout: Duration,
}

impl WebApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&IdentityConfig> for WebApiConfig {
    fn from(config: &IdentityConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(config.timeout())
    }
}

/// Outbound login body. Borrowed so the password is only exposed for the
/// lifetime of the request.
#[derive(Serialize)]
struct LoginRequestBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Identity provider backed by the web team's HTTP API.
pub struct WebApiIdentityProvider {
    config: WebApiConfig,
    client: Client,
}

impl WebApiIdentityProvider {
    /// Creates a new provider with its own HTTP client.
    pub fn new(config: WebApiConfig) -> Result<Self, IdentityError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| IdentityError::transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn login_url(&self) -> String {
        format!("{}login", self.config.base_url)
    }

    fn map_send_error(&self, e: reqwest::Error) -> IdentityError {
        if e.is_timeout() {
            IdentityError::transport(format!(
                "Request timed out after {}ms",
                self.config.timeout.as_millis()
            ))
        } else if e.is_connect() {
            IdentityError::transport(format!("Connection failed: {}", e))
        } else {
            IdentityError::transport(e.to_string())
        }
    }

    /// Picks the message for a rejected login: the provider's `error` string
    /// if it sent one, otherwise a generic status description.
    fn rejection_message(status: StatusCode, body: &[u8]) -> String {
        serde_json::from_slice::<Value>(body)
            .ok()
            .and_then(|v| match v.get("error") {
                Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                _ => None,
            })
            .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()))
    }
}

#[async_trait]
impl IdentityProvider for WebApiIdentityProvider {
    async fn login(&self, credentials: &Credentials) -> Result<UserRecord, IdentityError> {
        tracing::info!(email = %credentials.email(), "Calling identity provider login API");

        let body = LoginRequestBody {
            email: credentials.email(),
            password: credentials.expose_password(),
        };

        let response = self
            .client
            .post(self.login_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                let err = self.map_send_error(e);
                tracing::error!(error = %err, "Identity provider call failed");
                err
            })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            let err = self.map_send_error(e);
            tracing::error!(error = %err, "Failed to read identity provider response");
            err
        })?;

        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                body = %String::from_utf8_lossy(&bytes),
                "Identity provider rejected login"
            );
            return Err(IdentityError::rejected(
                status.as_u16(),
                Self::rejection_message(status, &bytes),
            ));
        }

        let payload: Value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(error = %e, "Identity provider returned non-JSON body");
            IdentityError::malformed(format!("Body is not JSON: {}", e))
        })?;

        let user = UserRecord::from_login_payload(&payload).map_err(|e| {
            tracing::warn!(error = %e, "Identity provider response missing required fields");
            IdentityError::malformed(e.to_string())
        })?;

        tracing::debug!(uid = %user.uid, name = %user.name, "Identity provider accepted login");

        Ok(user)
    }
}
