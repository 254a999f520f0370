//! Firebase custom token issuer.
//!
//! Mints custom tokens the same way the Firebase Admin SDK does when it is
//! initialized with a service account certificate: an RS256 JWT signed
//! locally with the service account's private key. No network call is made.
//!
//! # Token format
//!
//! - Header: `{"alg": "RS256", "typ": "JWT"}`
//! - `iss` / `sub`: the service account email
//! - `aud`: the Identity Toolkit audience
//! - `iat` / `exp`: issue time and expiry (at most one hour apart)
//! - `uid`: the user id the token is bound to (1..=128 characters)

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

use crate::config::{IssuerConfig, MAX_TOKEN_TTL_SECS};
use crate::domain::foundation::{UserId, ValidationError};
use crate::domain::login::CustomToken;
use crate::ports::{IssuerError, TokenIssuer};

/// Audience required by the platform for custom tokens.
pub const FIREBASE_AUDIENCE: &str =
    "https://identitytoolkit.googleapis.com/google.identity.identitytoolkit.v1.IdentityToolkit";

/// Longest uid the platform accepts, in UTF-16 code units.
pub const MAX_UID_LENGTH: usize = 128;

/// The fields of a service account key file this issuer needs.
#[derive(Debug, Deserialize)]
pub struct ServiceAccount {
    #[serde(rename = "type", default)]
    pub account_type: String,

    #[serde(default)]
    pub project_id: String,

    #[serde(default)]
    pub private_key_id: String,

    /// PEM-encoded RSA private key
    pub private_key: Secret<String>,

    pub client_email: String,
}

impl ServiceAccount {
    /// Parses a service account from its JSON key file contents.
    pub fn from_json(json: &str) -> Result<Self, IssuerError> {
        serde_json::from_str(json)
            .map_err(|e| IssuerError::Credential(format!("Malformed service account JSON: {}", e)))
    }

    /// Reads and parses a service account key file.
    pub fn from_file(path: &Path) -> Result<Self, IssuerError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            IssuerError::Credential(format!(
                "Cannot read service account file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&json)
    }
}

/// Claims carried by a custom token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTokenClaims {
    pub iss: String,
    pub sub: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
    pub uid: String,
}

/// Token issuer backed by a service account signing key.
pub struct FirebaseTokenIssuer {
    client_email: String,
    project_id: String,
    encoding_key: EncodingKey,
    ttl: Duration,
}

impl FirebaseTokenIssuer {
    /// Builds an issuer from a parsed service account.
    ///
    /// Fails with `IssuerError::Credential` if the account has no client
    /// email, the key is not a valid RSA PEM, or `ttl` is outside
    /// `1..=3600` seconds.
    pub fn new(account: ServiceAccount, ttl: Duration) -> Result<Self, IssuerError> {
        if account.client_email.is_empty() {
            return Err(IssuerError::Credential(
                "Service account is missing client_email".to_string(),
            ));
        }
        if ttl.as_secs() == 0 || ttl.as_secs() > MAX_TOKEN_TTL_SECS {
            return Err(IssuerError::Credential(format!(
                "Token lifetime must be between 1 and {} seconds",
                MAX_TOKEN_TTL_SECS
            )));
        }

        let encoding_key = EncodingKey::from_rsa_pem(account.private_key.expose_secret().as_bytes())
            .map_err(|e| IssuerError::Credential(format!("Invalid private key: {}", e)))?;

        Ok(Self {
            client_email: account.client_email,
            project_id: account.project_id,
            encoding_key,
            ttl,
        })
    }

    /// Loads the service account named by the configuration.
    pub fn from_config(config: &IssuerConfig) -> Result<Self, IssuerError> {
        let account = ServiceAccount::from_file(&config.service_account_path)?;
        Self::new(account, config.token_ttl())
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    fn claims_for(&self, uid: &UserId, issued_at: i64) -> CustomTokenClaims {
        CustomTokenClaims {
            iss: self.client_email.clone(),
            sub: self.client_email.clone(),
            aud: FIREBASE_AUDIENCE.to_string(),
            iat: issued_at,
            exp: issued_at + self.ttl.as_secs() as i64,
            uid: uid.as_str().to_string(),
        }
    }
}

#[async_trait]
impl TokenIssuer for FirebaseTokenIssuer {
    async fn mint_custom_token(&self, uid: &UserId) -> Result<CustomToken, IssuerError> {
        let len = uid.utf16_len();
        if len > MAX_UID_LENGTH {
            return Err(ValidationError::too_long("uid", MAX_UID_LENGTH, len).into());
        }

        let claims = self.claims_for(uid, chrono::Utc::now().timestamp());
        let token = encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)
            .map_err(|e| IssuerError::Signing(e.to_string()))?;

        tracing::info!(uid = %uid, "Generated custom token");

        Ok(CustomToken::new(token))
    }
}
