use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::{
    HashError, UserQueryError, UserRepositoryError,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordError {
    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    Hashing(#[from] HashError),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<UserRepositoryError> for PasswordError {
    fn from(err: UserRepositoryError) -> Self {
        match err {
            UserRepositoryError::UserNotFound => PasswordError::UserNotFound,
            other => PasswordError::RepositoryError(other.to_string()),
        }
    }
}

impl From<UserQueryError> for PasswordError {
    fn from(err: UserQueryError) -> Self {
        PasswordError::RepositoryError(err.to_string())
    }
}

/// Hashes and stores a new password for an existing user.
#[async_trait]
pub trait SetPasswordUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId, raw_password: &str) -> Result<(), PasswordError>;
}

/// `Ok(true)` only when the user exists and the stored hash matches.
#[async_trait]
pub trait CheckPasswordUseCase: Send + Sync {
    async fn execute(&self, username: &str, raw_password: &str) -> Result<bool, PasswordError>;
}
