use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::user_fields::UserFields;

use super::create_user::CreateUserError;

//
// ──────────────────────────────────────────────────────────
// Create Superuser Command
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, PartialEq)]
pub struct CreateSuperuserCommand {
    pub email: String,
    pub username: String,
    pub password: String,
    pub fields: UserFields,
}

impl CreateSuperuserCommand {
    pub fn new(
        email: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            password: password.into(),
            fields: UserFields::default(),
        }
    }

    pub fn with_fields(mut self, fields: UserFields) -> Self {
        self.fields = fields;
        self
    }
}

impl std::fmt::Debug for CreateSuperuserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateSuperuserCommand")
            .field("email", &self.email)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("fields", &self.fields)
            .finish()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateSuperuserError {
    #[error("Superuser must be assigned to is_staff=True.")]
    NotStaff,

    #[error("Superuser must be assigned to is_superuser=True.")]
    NotSuperuser,

    #[error(transparent)]
    CreateUser(#[from] CreateUserError),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateSuperuserUseCase: Send + Sync {
    async fn execute(&self, command: CreateSuperuserCommand) -> Result<User, CreateSuperuserError>;
}
