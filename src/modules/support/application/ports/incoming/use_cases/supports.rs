use async_trait::async_trait;
use uuid::Uuid;

use crate::support::application::domain::entities::{OrganizationId, Support};
use crate::support::application::ports::outgoing::SupportRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSupportCommand {
    pub supporter_type: Uuid,
    pub supporter_entity: OrganizationId,
    pub supported_type: Uuid,
    pub supported_entity: OrganizationId,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SupportError {
    #[error("Support not found")]
    NotFound,

    #[error("Referenced row not found: {0}")]
    ReferenceNotFound(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<SupportRepositoryError> for SupportError {
    fn from(err: SupportRepositoryError) -> Self {
        match err {
            SupportRepositoryError::NotFound => SupportError::NotFound,
            SupportRepositoryError::ReferenceNotFound(msg) => SupportError::ReferenceNotFound(msg),
            SupportRepositoryError::DatabaseError(msg) => SupportError::RepositoryError(msg),
        }
    }
}

#[async_trait]
pub trait CreateSupportUseCase: Send + Sync {
    async fn execute(&self, command: CreateSupportCommand) -> Result<Support, SupportError>;
}

#[async_trait]
pub trait GetSupportUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<Option<Support>, SupportError>;
}

/// Supports given or received by an organization, newest first.
#[async_trait]
pub trait ListOrganizationSupportsUseCase: Send + Sync {
    async fn execute(&self, organization: OrganizationId) -> Result<Vec<Support>, SupportError>;
}

#[async_trait]
pub trait DeleteSupportUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), SupportError>;
}
