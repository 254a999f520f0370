//! Mock identity provider for testing.
//!
//! Returns a pre-configured outcome and records the email of every call, so
//! tests can assert whether the provider was reached at all.
//!
//! # Example
//!
//! ```ignore
//! let provider = MockIdentityProvider::accepting(UserRecord::new(
//!     UserId::new("u1").unwrap(),
//!     "Alice",
//!     json!({}),
//! ));
//!
//! let user = provider.login(&credentials).await?;
//! assert_eq!(provider.call_count(), 1);
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::login::{Credentials, UserRecord};
use crate::ports::{IdentityError, IdentityProvider};

/// Mock identity provider.
#[derive(Debug, Clone)]
pub struct MockIdentityProvider {
    outcome: Result<UserRecord, IdentityError>,
    /// Emails seen, in call order.
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockIdentityProvider {
    /// A provider that accepts every login as `user`.
    pub fn accepting(user: UserRecord) -> Self {
        Self {
            outcome: Ok(user),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A provider that fails every login with `error`.
    pub fn failing(error: IdentityError) -> Self {
        Self {
            outcome: Err(error),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn login(&self, credentials: &Credentials) -> Result<UserRecord, IdentityError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(credentials.email().to_string());
        }
        self.outcome.clone()
    }
}
