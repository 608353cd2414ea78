use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::incoming::use_cases::{
    CreateSuperuserCommand, CreateSuperuserError, CreateSuperuserUseCase, CreateUserCommand,
    CreateUserUseCase,
};

/// Creates users with elevated flags by delegating to the regular creation path.
#[derive(Clone)]
pub struct CreateSuperuserService {
    create_user: Arc<dyn CreateUserUseCase>,
}

impl CreateSuperuserService {
    pub fn new(create_user: Arc<dyn CreateUserUseCase>) -> Self {
        Self { create_user }
    }
}

#[async_trait]
impl CreateSuperuserUseCase for CreateSuperuserService {
    async fn execute(&self, command: CreateSuperuserCommand) -> Result<User, CreateSuperuserError> {
        let CreateSuperuserCommand {
            email,
            username,
            password,
            mut fields,
        } = command;

        // Defaults never override a value the caller provided
        let is_staff = *fields.is_staff.get_or_insert(true);
        let is_superuser = *fields.is_superuser.get_or_insert(true);
        fields.is_active.get_or_insert(true);

        if !is_staff {
            warn!(username = %username, "Superuser requested with is_staff=false");
            return Err(CreateSuperuserError::NotStaff);
        }
        if !is_superuser {
            warn!(username = %username, "Superuser requested with is_superuser=false");
            return Err(CreateSuperuserError::NotSuperuser);
        }

        let command = CreateUserCommand::new(username, password)
            .with_email(email)
            .with_fields(fields);

        Ok(self.create_user.execute(command).await?)
    }
}
