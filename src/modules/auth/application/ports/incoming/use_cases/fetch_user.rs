use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::UserQueryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchUserError {
    #[error("Query error: {0}")]
    QueryError(String),
}

impl From<UserQueryError> for FetchUserError {
    fn from(err: UserQueryError) -> Self {
        FetchUserError::QueryError(err.to_string())
    }
}

#[async_trait]
pub trait FetchUserUseCase: Send + Sync {
    async fn by_id(&self, user_id: UserId) -> Result<Option<User>, FetchUserError>;
    async fn by_username(&self, username: &str) -> Result<Option<User>, FetchUserError>;
}
