//! Mock token issuer for testing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::login::CustomToken;
use crate::ports::{IssuerError, TokenIssuer};

/// Mock token issuer.
///
/// Mints `mock-token-for-<uid>` unless an error is forced, and records every
/// uid it was asked to mint for.
#[derive(Debug, Clone, Default)]
pub struct MockTokenIssuer {
    force_error: Option<IssuerError>,
    uids: Arc<Mutex<Vec<String>>>,
}

impl MockTokenIssuer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces every mint to fail with `error`.
    pub fn with_error(mut self, error: IssuerError) -> Self {
        self.force_error = Some(error);
        self
    }

    /// The token this mock mints for `uid`.
    pub fn token_for(uid: &str) -> String {
        format!("mock-token-for-{}", uid)
    }

    pub fn minted_uids(&self) -> Vec<String> {
        self.uids.lock().map(|u| u.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl TokenIssuer for MockTokenIssuer {
    async fn mint_custom_token(&self, uid: &UserId) -> Result<CustomToken, IssuerError> {
        if let Ok(mut uids) = self.uids.lock() {
            uids.push(uid.as_str().to_string());
        }
        if let Some(error) = &self.force_error {
            return Err(error.clone());
        }
        Ok(CustomToken::new(Self::token_for(uid.as_str())))
    }
}
