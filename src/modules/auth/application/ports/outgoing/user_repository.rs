use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::domain::user_fields::UserFields;

// Input DTO for inserting a user; every column resolved to a concrete value
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub location: String,
    pub description: String,
    pub verified: bool,
    pub verification_method: String,
    pub verification_partner: Option<UserId>,
    pub verification_code: Option<Uuid>,
    pub icon_id: Option<Uuid>,
    pub is_confirmed: bool,
    pub is_private: bool,
    pub is_high_risk: bool,
    pub is_active: bool,
    pub is_admin: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub last_login: Option<DateTime<Utc>>,
}

impl NewUser {
    /// Applies the model defaults to every field the caller left unset.
    pub fn from_fields(
        username: String,
        email: String,
        password_hash: String,
        fields: UserFields,
    ) -> Self {
        Self {
            id: UserId::new(),
            username,
            email,
            password_hash,
            name: fields.name.unwrap_or_default(),
            location: fields.location.unwrap_or_default(),
            description: fields.description.unwrap_or_default(),
            verified: fields.verified.unwrap_or(false),
            verification_method: fields.verification_method.unwrap_or_default(),
            verification_partner: fields.verification_partner,
            verification_code: fields.verification_code,
            icon_id: fields.icon_id,
            is_confirmed: fields.is_confirmed.unwrap_or(false),
            is_private: fields.is_private.unwrap_or(false),
            is_high_risk: fields.is_high_risk.unwrap_or(false),
            is_active: fields.is_active.unwrap_or(true),
            is_admin: fields.is_admin.unwrap_or(false),
            is_staff: fields.is_staff.unwrap_or(false),
            is_superuser: fields.is_superuser.unwrap_or(false),
            last_login: fields.last_login,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    /// A foreign key (verification partner, icon) points at a missing row.
    #[error("Referenced row not found: {0}")]
    ReferenceNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError>;

    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fields_applies_model_defaults() {
        let user = NewUser::from_fields(
            "alice".to_string(),
            String::new(),
            "hash".to_string(),
            UserFields::default(),
        );

        assert!(user.is_active);
        assert!(!user.verified);
        assert!(!user.is_staff);
        assert!(!user.is_superuser);
        assert!(!user.is_admin);
        assert_eq!(user.name, "");
        assert_eq!(user.verification_partner, None);
    }

    #[test]
    fn from_fields_keeps_explicit_values() {
        let partner = UserId::new();
        let fields = UserFields {
            is_active: Some(false),
            verified: Some(true),
            verification_method: Some("in_person".to_string()),
            verification_partner: Some(partner),
            ..Default::default()
        };

        let user = NewUser::from_fields(
            "bob".to_string(),
            "b@example.com".to_string(),
            "hash".to_string(),
            fields,
        );

        assert!(!user.is_active);
        assert!(user.verified);
        assert_eq!(user.verification_method, "in_person");
        assert_eq!(user.verification_partner, Some(partner));
    }
}
