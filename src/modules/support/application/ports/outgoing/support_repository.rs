use async_trait::async_trait;
use uuid::Uuid;

use crate::support::application::domain::entities::{OrganizationId, Support};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSupport {
    pub supporter_type: Uuid,
    pub supporter_entity: OrganizationId,
    pub supported_type: Uuid,
    pub supported_entity: OrganizationId,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SupportRepositoryError {
    #[error("Support not found")]
    NotFound,

    /// A type or organization reference is dangling.
    #[error("Referenced row not found: {0}")]
    ReferenceNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SupportRepository: Send + Sync {
    async fn create(&self, support: NewSupport) -> Result<Support, SupportRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Support>, SupportRepositoryError>;

    /// Rows where the organization is on either side, newest first.
    async fn list_for_organization(
        &self,
        organization: OrganizationId,
    ) -> Result<Vec<Support>, SupportRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), SupportRepositoryError>;
}
