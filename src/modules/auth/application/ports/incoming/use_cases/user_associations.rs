use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AssociationKind, UserId};
use crate::auth::application::ports::outgoing::AssociationRepositoryError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserAssociationError {
    #[error("User or {kind} not found")]
    NotFound { kind: AssociationKind },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl UserAssociationError {
    pub fn from_repository(err: AssociationRepositoryError, kind: AssociationKind) -> Self {
        match err {
            AssociationRepositoryError::ReferenceNotFound(_) => {
                UserAssociationError::NotFound { kind }
            }
            AssociationRepositoryError::DatabaseError(msg) => {
                UserAssociationError::RepositoryError(msg)
            }
        }
    }
}

/// Many-to-many links between a user and content entities.
#[async_trait]
pub trait ManageUserAssociationsUseCase: Send + Sync {
    async fn add(
        &self,
        user_id: UserId,
        kind: AssociationKind,
        target_id: Uuid,
    ) -> Result<(), UserAssociationError>;

    async fn remove(
        &self,
        user_id: UserId,
        kind: AssociationKind,
        target_id: Uuid,
    ) -> Result<bool, UserAssociationError>;

    async fn list(
        &self,
        user_id: UserId,
        kind: AssociationKind,
    ) -> Result<Vec<Uuid>, UserAssociationError>;
}
