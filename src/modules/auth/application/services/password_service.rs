use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::incoming::use_cases::{
    CheckPasswordUseCase, PasswordError, SetPasswordUseCase,
};
use crate::auth::application::ports::outgoing::{
    HashError, PasswordHasher, UserQuery, UserRepository,
};

pub struct PasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    user_query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<Q, R> PasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(user_query: Q, repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            user_query,
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<Q, R> SetPasswordUseCase for PasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId, raw_password: &str) -> Result<(), PasswordError> {
        let password_hash = self.password_hasher.hash_password(raw_password).await?;

        self.repository
            .update_password(user_id, password_hash)
            .await?;

        info!(user_id = %user_id, "Password changed");
        Ok(())
    }
}

#[async_trait]
impl<Q, R> CheckPasswordUseCase for PasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, username: &str, raw_password: &str) -> Result<bool, PasswordError> {
        let Some(user) = self.user_query.find_by_username(username).await? else {
            return Ok(false);
        };

        let matches = match self
            .password_hasher
            .verify_password(raw_password, &user.password_hash)
            .await
        {
            Ok(matches) => matches,
            // Unusable or unrecognised stored hash
            Err(HashError::VerifyFailed) => {
                warn!(username = %username, "Stored password hash is not usable");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        if !matches {
            warn!(username = %username, "Password check failed");
        }
        Ok(matches)
    }
}
