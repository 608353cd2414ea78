use async_trait::async_trait;

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::user_fields::{UserFieldError, UserFields};
use crate::auth::application::ports::outgoing::UserRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Create User Command
// ──────────────────────────────────────────────────────────
//

#[derive(Clone, PartialEq)]
pub struct CreateUserCommand {
    pub username: String,
    pub password: String,
    /// Empty means "no email".
    pub email: String,
    pub fields: UserFields,
}

impl CreateUserCommand {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            email: String::new(),
            fields: UserFields::default(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_fields(mut self, fields: UserFields) -> Self {
        self.fields = fields;
        self
    }
}

impl std::fmt::Debug for CreateUserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserCommand")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("email", &self.email)
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
pub enum CreateUserError {
    #[error("Invalid field: {0}")]
    InvalidField(#[from] UserFieldError),

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("User already exists")]
    UserAlreadyExists,

    /// Storage failures other than the username conflict, unmodified.
    #[error(transparent)]
    Repository(UserRepositoryError),
}

impl From<UserRepositoryError> for CreateUserError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UserAlreadyExists => CreateUserError::UserAlreadyExists,
            other => CreateUserError::Repository(other),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, command: CreateUserCommand) -> Result<User, CreateUserError>;
}
