use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::entities::UserId;

pub const USERNAME_MAX_LEN: usize = 255;
pub const NAME_MAX_LEN: usize = 255;
pub const LOCATION_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;
pub const VERIFICATION_METHOD_MAX_LEN: usize = 30;
pub const EMAIL_MAX_LEN: usize = 254;

/// Optional user columns accepted at creation time.
///
/// `None` means "not provided": the column receives its model default.
/// `Some(value)` is always stored as given, including `Some(false)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFields {
    pub name: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub verified: Option<bool>,
    pub verification_method: Option<String>,
    pub verification_partner: Option<UserId>,
    pub verification_code: Option<Uuid>,
    pub icon_id: Option<Uuid>,
    pub is_confirmed: Option<bool>,
    pub is_private: Option<bool>,
    pub is_high_risk: Option<bool>,
    pub is_active: Option<bool>,
    pub is_admin: Option<bool>,
    pub is_staff: Option<bool>,
    pub is_superuser: Option<bool>,
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserFieldError {
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl UserFields {
    pub fn validate(&self) -> Result<(), UserFieldError> {
        check_len("name", self.name.as_deref(), NAME_MAX_LEN)?;
        check_len("location", self.location.as_deref(), LOCATION_MAX_LEN)?;
        check_len(
            "description",
            self.description.as_deref(),
            DESCRIPTION_MAX_LEN,
        )?;
        check_len(
            "verification_method",
            self.verification_method.as_deref(),
            VERIFICATION_METHOD_MAX_LEN,
        )
    }
}

/// Lengths are counted in characters, not bytes.
pub fn check_len(field: &'static str, value: Option<&str>, max: usize) -> Result<(), UserFieldError> {
    match value {
        Some(v) if v.chars().count() > max => Err(UserFieldError::TooLong { field, max }),
        _ => Ok(()),
    }
}

/// Lowercases the domain part of an address.
///
/// Surrounding whitespace is trimmed when the address contains an `@`;
/// anything without one is returned untouched.
pub fn normalize_email(email: &str) -> String {
    match email.trim().rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_email_lowercases_domain_only() {
        assert_eq!(normalize_email("John.Doe@EXAMPLE.Com"), "John.Doe@example.com");
    }

    #[test]
    fn normalize_email_trims_and_splits_on_last_at() {
        assert_eq!(normalize_email("  \"a@b\"@Example.ORG "), "\"a@b\"@example.org");
    }

    #[test]
    fn normalize_email_keeps_values_without_at_sign() {
        assert_eq!(normalize_email(" not-an-email "), " not-an-email ");
    }

    #[test]
    fn validate_accepts_defaults_and_limits() {
        assert!(UserFields::default().validate().is_ok());

        let fields = UserFields {
            location: Some("x".repeat(LOCATION_MAX_LEN)),
            verification_method: Some("é".repeat(VERIFICATION_METHOD_MAX_LEN)),
            ..Default::default()
        };
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn validate_rejects_too_long_values() {
        let fields = UserFields {
            description: Some("d".repeat(DESCRIPTION_MAX_LEN + 1)),
            ..Default::default()
        };

        assert_eq!(
            fields.validate(),
            Err(UserFieldError::TooLong {
                field: "description",
                max: DESCRIPTION_MAX_LEN
            })
        );
    }
}
