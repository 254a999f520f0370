//! ProxyLoginHandler - Command handler for the login proxy transaction.
//!
//! Validates the submitted credentials, verifies them with the identity
//! provider and mints a custom token for the returned user.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::ValidationError;
use crate::domain::login::{Credentials, CustomToken, UserRecord};
use crate::ports::{IdentityError, IdentityProvider, IssuerError, TokenIssuer};

/// Command to log a user in through the proxy.
///
/// Fields are optional because clients may omit them; presence is checked by
/// the handler.
#[derive(Debug, Clone, Default)]
pub struct ProxyLoginCommand {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Result of a successful proxy login.
#[derive(Debug, Clone)]
pub struct ProxyLoginResult {
    pub custom_token: CustomToken,
    pub user: UserRecord,
}

/// Broad category of a login failure, used to pick the HTTP status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginErrorKind {
    Validation,
    Provider,
    Transport,
    Issuer,
}

/// Errors from a proxy login.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("Email and password are required")]
    MissingCredentials(#[source] ValidationError),

    /// The identity provider rejected the login or answered with an unusable
    /// payload. The message is shown to the client.
    #[error("Web team API error: {0}")]
    Provider(#[source] IdentityError),

    #[error("Identity provider unavailable: {0}")]
    Transport(#[source] IdentityError),

    #[error("Custom token minting failed: {0}")]
    Issuer(#[from] IssuerError),
}

impl LoginError {
    pub fn kind(&self) -> LoginErrorKind {
        match self {
            LoginError::MissingCredentials(_) => LoginErrorKind::Validation,
            LoginError::Provider(_) => LoginErrorKind::Provider,
            LoginError::Transport(_) => LoginErrorKind::Transport,
            LoginError::Issuer(_) => LoginErrorKind::Issuer,
        }
    }
}

impl From<IdentityError> for LoginError {
    fn from(err: IdentityError) -> Self {
        if err.is_provider_origin() {
            LoginError::Provider(err)
        } else {
            LoginError::Transport(err)
        }
    }
}

/// Handler for proxy logins.
///
/// Both collaborators are injected once at startup and shared across
/// requests; the handler itself holds no per-request state.
pub struct ProxyLoginHandler {
    identity_provider: Arc<dyn IdentityProvider>,
    token_issuer: Arc<dyn TokenIssuer>,
}

impl ProxyLoginHandler {
    pub fn new(
        identity_provider: Arc<dyn IdentityProvider>,
        token_issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            identity_provider,
            token_issuer,
        }
    }

    pub async fn handle(&self, cmd: ProxyLoginCommand) -> Result<ProxyLoginResult, LoginError> {
        // 1. Presence check; nothing leaves the process if this fails
        let credentials = Credentials::new(
            cmd.email.unwrap_or_default(),
            cmd.password.unwrap_or_default(),
        )
        .map_err(|e| {
            tracing::warn!(reason = %e, "Invalid login input received");
            LoginError::MissingCredentials(e)
        })?;

        // 2. Verify with the identity provider
        let user = self.identity_provider.login(&credentials).await?;

        // 3. Mint a custom token bound to the provider's uid
        let custom_token = self.token_issuer.mint_custom_token(&user.uid).await?;

        Ok(ProxyLoginResult { custom_token, user })
    }
}
