use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AssociationKind, UserId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssociationRepositoryError {
    /// The user or the target row does not exist.
    #[error("Referenced row not found: {0}")]
    ReferenceNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserAssociationRepository: Send + Sync {
    /// Links `target_id`; linking twice is a no-op.
    async fn add(
        &self,
        user_id: UserId,
        kind: AssociationKind,
        target_id: Uuid,
    ) -> Result<(), AssociationRepositoryError>;

    /// Returns whether a link was removed.
    async fn remove(
        &self,
        user_id: UserId,
        kind: AssociationKind,
        target_id: Uuid,
    ) -> Result<bool, AssociationRepositoryError>;

    async fn list(
        &self,
        user_id: UserId,
        kind: AssociationKind,
    ) -> Result<Vec<Uuid>, AssociationRepositoryError>;
}
