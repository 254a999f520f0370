//! Custom token value object.

use std::fmt;

/// Signed custom token a client exchanges with the identity platform for a
/// full session.
///
/// Opaque to this service. `Debug` is redacted so tokens don't leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct CustomToken(String);

impl CustomToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for CustomToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomToken([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_redacted() {
        let token = CustomToken::new("eyJhbGciOiJSUzI1NiJ9.payload.sig");
        assert_eq!(format!("{:?}", token), "CustomToken([REDACTED])");
        assert_eq!(token.as_str(), "eyJhbGciOiJSUzI1NiJ9.payload.sig");
    }
}
