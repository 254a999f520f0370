//! User record returned by the identity provider.

use serde_json::Value;

use crate::domain::foundation::{UserId, ValidationError};

/// A user as reported by the external identity provider.
///
/// Only `uid`, `name` and `profileInfo` are kept. `profile_info` is passed
/// through untouched; its schema belongs to the provider.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub uid: UserId,
    pub name: String,
    pub profile_info: Value,
}

impl UserRecord {
    pub fn new(uid: UserId, name: impl Into<String>, profile_info: Value) -> Self {
        Self {
            uid,
            name: name.into(),
            profile_info,
        }
    }

    /// Extracts the user from a provider login payload of the shape
    /// `{"user": {"uid": .., "name": .., "profileInfo": ..}}`.
    ///
    /// `uid` and `name` must be non-empty strings and `profileInfo` must be
    /// truthy. Any other fields of the payload are ignored.
    pub fn from_login_payload(payload: &Value) -> Result<Self, ValidationError> {
        let user = payload
            .get("user")
            .filter(|u| u.is_object())
            .ok_or_else(|| ValidationError::invalid_format("user", "missing user object"))?;

        let uid = non_empty_str(user, "uid")?;
        let name = non_empty_str(user, "name")?;

        let profile_info = user
            .get("profileInfo")
            .filter(|v| is_truthy(v))
            .cloned()
            .ok_or_else(|| ValidationError::empty_field("profileInfo"))?;

        Ok(Self {
            uid: UserId::new(uid)?,
            name: name.to_string(),
            profile_info,
        })
    }
}

fn non_empty_str<'a>(user: &'a Value, field: &str) -> Result<&'a str, ValidationError> {
    match user.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.as_str()),
        Some(Value::String(_)) | Some(Value::Null) | None => {
            Err(ValidationError::empty_field(field))
        }
        Some(_) => Err(ValidationError::invalid_format(field, "expected a string")),
    }
}

/// JSON truthiness: everything except `null`, `false`, `0` and `""`.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_complete_payload() {
        let payload = json!({
            "user": {"uid": "u1", "name": "Alice", "profileInfo": {}, "role": "student"},
            "token": "ignored"
        });

        let user = UserRecord::from_login_payload(&payload).unwrap();

        assert_eq!(user.uid.as_str(), "u1");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.profile_info, json!({}));
    }

    #[test]
    fn profile_info_is_passed_through_unchanged() {
        let profile = json!({"grade": 7, "tags": ["a", "b"], "nested": {"x": null}});
        let payload = json!({"user": {"uid": "u1", "name": "Alice", "profileInfo": profile}});

        let user = UserRecord::from_login_payload(&payload).unwrap();

        assert_eq!(user.profile_info, profile);
    }

    #[test]
    fn rejects_missing_user() {
        assert!(UserRecord::from_login_payload(&json!({"ok": true})).is_err());
        assert!(UserRecord::from_login_payload(&json!({"user": null})).is_err());
        assert!(UserRecord::from_login_payload(&json!({"user": "u1"})).is_err());
        assert!(UserRecord::from_login_payload(&json!([])).is_err());
    }

    #[test]
    fn rejects_missing_uid() {
        let payload = json!({"user": {"name": "Alice", "profileInfo": {}}});
        assert_eq!(
            UserRecord::from_login_payload(&payload),
            Err(ValidationError::empty_field("uid"))
        );
    }

    #[test]
    fn rejects_empty_name() {
        let payload = json!({"user": {"uid": "u1", "name": "", "profileInfo": {}}});
        assert_eq!(
            UserRecord::from_login_payload(&payload),
            Err(ValidationError::empty_field("name"))
        );
    }

    #[test]
    fn rejects_non_string_uid() {
        let payload = json!({"user": {"uid": 42, "name": "Alice", "profileInfo": {}}});
        assert!(matches!(
            UserRecord::from_login_payload(&payload),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn rejects_falsy_profile_info() {
        for falsy in [json!(null), json!(false), json!(0), json!("")] {
            let payload = json!({"user": {"uid": "u1", "name": "Alice", "profileInfo": falsy}});
            assert!(UserRecord::from_login_payload(&payload).is_err());
        }
    }

    #[test]
    fn accepts_truthy_scalar_profile_info() {
        for truthy in [json!(true), json!(1), json!("basic"), json!([])] {
            let payload = json!({"user": {"uid": "u1", "name": "Alice", "profileInfo": truthy}});
            assert!(UserRecord::from_login_payload(&payload).is_ok());
        }
    }
}
