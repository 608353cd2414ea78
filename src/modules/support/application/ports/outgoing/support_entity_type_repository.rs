use async_trait::async_trait;
use uuid::Uuid;

use crate::support::application::domain::entities::SupportEntityType;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SupportEntityTypeRepositoryError {
    #[error("Support entity type not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait SupportEntityTypeRepository: Send + Sync {
    async fn create(&self, name: String) -> Result<SupportEntityType, SupportEntityTypeRepositoryError>;

    /// Ordered by name.
    async fn list(&self) -> Result<Vec<SupportEntityType>, SupportEntityTypeRepositoryError>;

    /// Supports tagged with the type are removed by the storage cascade.
    async fn delete(&self, id: Uuid) -> Result<(), SupportEntityTypeRepositoryError>;
}
