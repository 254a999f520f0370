//! HTTP DTOs (Data Transfer Objects) for the login endpoint.
//!
//! Field names follow the JSON contract mobile/web clients already use
//! (`customToken`, `profileInfo`).

use serde::{Deserialize, Serialize};

use crate::application::{ProxyLoginCommand, ProxyLoginResult};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Login request body. Both fields may be absent; the handler reports that.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProxyLoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl ProxyLoginRequest {
    /// Parses a raw request body.
    ///
    /// Only `application/json` and `+json` media types are read. Any other
    /// content type, or anything that is not a JSON object with string (or
    /// absent) fields, is treated as an empty request.
    pub fn from_body(content_type: Option<&str>, body: &[u8]) -> Self {
        if !content_type.is_some_and(is_json_media_type) {
            return Self::default();
        }
        serde_json::from_slice(body).unwrap_or_default()
    }
}

fn is_json_media_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

impl From<ProxyLoginRequest> for ProxyLoginCommand {
    fn from(request: ProxyLoginRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Successful login response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyLoginResponse {
    pub custom_token: String,
    pub user: LoginUserResponse,
}

/// User echoed back to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUserResponse {
    pub uid: String,
    pub name: String,
    pub profile_info: serde_json::Value,
}

impl From<ProxyLoginResult> for ProxyLoginResponse {
    fn from(result: ProxyLoginResult) -> Self {
        Self {
            custom_token: result.custom_token.into_inner(),
            user: LoginUserResponse {
                uid: result.user.uid.as_str().to_string(),
                name: result.user.name,
                profile_info: result.user.profile_info,
            },
        }
    }
}

/// Error body: `{"error": "<message>"}`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
