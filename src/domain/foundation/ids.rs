//! Identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// User identifier issued by the external identity provider.
///
/// This is the stable identity a custom token is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::empty_field("uid"));
        }
        Ok(Self(id))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in UTF-16 code units, the unit the token platform measures
    /// uid limits in.
    pub fn utf16_len(&self) -> usize {
        self.0.encode_utf16().count()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_rejects_empty() {
        assert_eq!(UserId::new(""), Err(ValidationError::empty_field("uid")));
    }

    #[test]
    fn user_id_displays_inner_value() {
        let id = UserId::new("u1").unwrap();
        assert_eq!(id.to_string(), "u1");
        assert_eq!(id.as_str(), "u1");
    }

    #[test]
    fn user_id_length_counts_utf16_units() {
        assert_eq!(UserId::new("üñí").unwrap().utf16_len(), 3);
        // Astral characters take a surrogate pair each
        assert_eq!(UserId::new("😀😀").unwrap().utf16_len(), 4);
    }

    #[test]
    fn user_id_serializes_transparently() {
        let id = UserId::new("u1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"u1\"");
    }
}
