use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{DeleteUserError, DeleteUserUseCase};
use crate::auth::application::ports::outgoing::UserRepository;

pub struct DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteUserUseCase for DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteUserError> {
        match self.repository.delete_user(user_id).await {
            Ok(()) => {
                info!(user_id = %user_id, "User deleted");
                Ok(())
            }
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "User deletion failed");
                Err(e.into())
            }
        }
    }
}
