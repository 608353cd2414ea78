use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::auth::application::domain::entities::User;
use crate::auth::application::domain::user_fields::{
    check_len, normalize_email, EMAIL_MAX_LEN, USERNAME_MAX_LEN,
};
use crate::auth::application::ports::incoming::use_cases::{
    CreateUserCommand, CreateUserError, CreateUserUseCase,
};
use crate::auth::application::ports::outgoing::{NewUser, PasswordHasher, UserRepository};

#[derive(Clone)]
pub struct CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl<R> CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R, password_hasher: Arc<dyn PasswordHasher>) -> Self {
        Self {
            repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R> CreateUserUseCase for CreateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: CreateUserCommand) -> Result<User, CreateUserError> {
        let CreateUserCommand {
            username,
            password,
            email,
            fields,
        } = command;

        let email = if email.is_empty() {
            email
        } else {
            normalize_email(&email)
        };

        let validation = check_len("username", Some(&username), USERNAME_MAX_LEN)
            .and_then(|_| check_len("email", Some(&email), EMAIL_MAX_LEN))
            .and_then(|_| fields.validate());
        if let Err(e) = validation {
            warn!(username = %username, error = %e, "Invalid user fields");
            return Err(e.into());
        }

        // Uniqueness is left to the storage layer
        let password_hash = self
            .password_hasher
            .hash_password(&password)
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let new_user = NewUser::from_fields(username, email, password_hash, fields);

        match self.repository.create_user(new_user).await {
            Ok(user) => {
                info!(
                    user_id = %user.id,
                    username = %user.username,
                    is_staff = user.is_staff,
                    is_superuser = user.is_superuser,
                    "User created"
                );
                Ok(user)
            }
            Err(e) => {
                let err = CreateUserError::from(e);
                match &err {
                    CreateUserError::UserAlreadyExists => {
                        warn!(error = %err, "Username already taken")
                    }
                    other => error!(error = %other, "User creation failed"),
                }
                Err(err)
            }
        }
    }
}
