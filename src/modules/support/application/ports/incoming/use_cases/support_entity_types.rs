use async_trait::async_trait;
use uuid::Uuid;

use crate::support::application::domain::entities::{
    SupportEntityType, SUPPORT_ENTITY_TYPE_NAME_MAX_LEN,
};
use crate::support::application::ports::outgoing::SupportEntityTypeRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Create Support Entity Type Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSupportEntityTypeCommand {
    name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateSupportEntityTypeCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Name too long (max 255 characters)")]
    NameTooLong,
}

impl CreateSupportEntityTypeCommand {
    pub fn new(name: impl AsRef<str>) -> Result<Self, CreateSupportEntityTypeCommandError> {
        let name = name.as_ref().trim();

        if name.is_empty() {
            return Err(CreateSupportEntityTypeCommandError::EmptyName);
        }

        if name.chars().count() > SUPPORT_ENTITY_TYPE_NAME_MAX_LEN {
            return Err(CreateSupportEntityTypeCommandError::NameTooLong);
        }

        Ok(Self {
            name: name.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SupportEntityTypeError {
    #[error("Support entity type not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SupportEntityTypeRepositoryError> for SupportEntityTypeError {
    fn from(err: SupportEntityTypeRepositoryError) -> Self {
        match err {
            SupportEntityTypeRepositoryError::NotFound => SupportEntityTypeError::NotFound,
            SupportEntityTypeRepositoryError::DatabaseError(msg) => {
                SupportEntityTypeError::RepositoryError(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Ports (Use Cases)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateSupportEntityTypeUseCase: Send + Sync {
    async fn execute(
        &self,
        command: CreateSupportEntityTypeCommand,
    ) -> Result<SupportEntityType, SupportEntityTypeError>;
}

#[async_trait]
pub trait ListSupportEntityTypesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SupportEntityType>, SupportEntityTypeError>;
}

#[async_trait]
pub trait DeleteSupportEntityTypeUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), SupportEntityTypeError>;
}
