//! Identity provider port for credential verification.
//!
//! The external identity provider is the system of record for email/password
//! authentication. This port hides its wire contract behind one operation.
//!
//! # Example
//!
//! ```ignore
//! async fn authenticate(
//!     provider: Arc<dyn IdentityProvider>,
//!     credentials: &Credentials,
//! ) -> Result<UserRecord, IdentityError> {
//!     provider.login(credentials).await
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::login::{Credentials, UserRecord};

/// Message reported when the provider answers successfully with an unusable body.
pub const MALFORMED_RESPONSE_MESSAGE: &str = "Invalid response format from web API";

/// Errors from the identity provider call.
///
/// `Rejected` and `MalformedResponse` originate at the provider and are
/// surfaced to the client; `Transport` means no response was received.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// The provider answered with a non-success HTTP status.
    ///
    /// `message` is the provider's own `error` field when present, otherwise
    /// a generic description of the status.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The provider answered successfully but the payload lacks required fields.
    #[error("Invalid response format from web API")]
    MalformedResponse { reason: String },

    /// No response was received (connection, DNS, timeout).
    #[error("Identity provider unreachable: {0}")]
    Transport(String),
}

impl IdentityError {
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self::Rejected {
            status,
            message: message.into(),
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
        }
    }

    pub fn transport(reason: impl Into<String>) -> Self {
        Self::Transport(reason.into())
    }

    /// Whether the failure was reported by the provider itself rather than
    /// the network.
    pub fn is_provider_origin(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::MalformedResponse { .. })
    }
}

/// Verifies credentials against the external identity provider.
///
/// # Contract
///
/// Implementations must:
/// - Return the user when the provider accepts the credentials and the
///   response carries `uid`, `name` and `profileInfo`
/// - Return `IdentityError::Rejected` for non-success HTTP responses
/// - Return `IdentityError::MalformedResponse` for unusable success payloads
/// - Return `IdentityError::Transport` when no response arrives
/// - Never log the password
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Log in with the given credentials.
    async fn login(&self, credentials: &Credentials) -> Result<UserRecord, IdentityError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_displays_provider_message() {
        let err = IdentityError::rejected(401, "bad credentials");
        assert_eq!(err.to_string(), "bad credentials");
    }

    #[test]
    fn malformed_displays_fixed_message() {
        let err = IdentityError::malformed("missing uid");
        assert_eq!(err.to_string(), MALFORMED_RESPONSE_MESSAGE);
    }

    #[test]
    fn provider_origin_classification() {
        assert!(IdentityError::rejected(500, "boom").is_provider_origin());
        assert!(IdentityError::malformed("x").is_provider_origin());
        assert!(!IdentityError::transport("timeout").is_provider_origin());
    }

    #[test]
    fn identity_provider_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn IdentityProvider) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn IdentityProvider>>();
    }
}
