//! Token issuer port for minting custom authentication tokens.
//!
//! A custom token binds an externally authenticated identity to the
//! platform: the client exchanges it for a full session.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::{UserId, ValidationError};
use crate::domain::login::CustomToken;

/// Errors from the token issuer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IssuerError {
    /// The uid does not satisfy the platform's constraints.
    #[error("Invalid uid for custom token: {0}")]
    InvalidUid(#[from] ValidationError),

    /// The service credential is absent or unusable.
    #[error("Invalid service account credential: {0}")]
    Credential(String),

    /// Signing the token failed.
    #[error("Failed to sign custom token: {0}")]
    Signing(String),
}

/// Mints custom tokens for a user id.
///
/// # Contract
///
/// Implementations must:
/// - Return a signed token bound to `uid`
/// - Return `IssuerError::InvalidUid` when the uid is rejected by the platform
/// - Return `IssuerError::Signing` when the underlying signing fails
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn mint_custom_token(&self, uid: &UserId) -> Result<CustomToken, IssuerError>;
}
