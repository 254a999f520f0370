//! Login credentials value object.

use secrecy::{ExposeSecret, Secret};

use crate::domain::foundation::ValidationError;

/// Email/password pair submitted by a client for one login attempt.
///
/// The password is wrapped in [`Secret`] so it never shows up in `Debug`
/// output or log records. Only the identity provider adapter exposes it,
/// when building the outbound request body.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: String,
    password: Secret<String>,
}

impl Credentials {
    /// Creates credentials, rejecting an empty email or password.
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let email = email.into();
        let password = password.into();

        if email.is_empty() {
            return Err(ValidationError::empty_field("email"));
        }
        if password.is_empty() {
            return Err(ValidationError::empty_field("password"));
        }

        Ok(Self {
            email,
            password: Secret::new(password),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Exposes the password for the outbound provider call.
    pub fn expose_password(&self) -> &str {
        self.password.expose_secret()
    }
}
