use async_trait::async_trait;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::auth::application::domain::entities::{AssociationKind, UserId};
use crate::auth::application::ports::incoming::use_cases::{
    ManageUserAssociationsUseCase, UserAssociationError,
};
use crate::auth::application::ports::outgoing::UserAssociationRepository;

pub struct UserAssociationsService<R>
where
    R: UserAssociationRepository + Send + Sync,
{
    repository: R,
}

impl<R> UserAssociationsService<R>
where
    R: UserAssociationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ManageUserAssociationsUseCase for UserAssociationsService<R>
where
    R: UserAssociationRepository + Send + Sync,
{
    async fn add(
        &self,
        user_id: UserId,
        kind: AssociationKind,
        target_id: Uuid,
    ) -> Result<(), UserAssociationError> {
        self.repository
            .add(user_id, kind, target_id)
            .await
            .map_err(|e| {
                warn!(user_id = %user_id, %kind, %target_id, error = %e, "Link failed");
                UserAssociationError::from_repository(e, kind)
            })?;

        debug!(user_id = %user_id, %kind, %target_id, "Linked");
        Ok(())
    }

    async fn remove(
        &self,
        user_id: UserId,
        kind: AssociationKind,
        target_id: Uuid,
    ) -> Result<bool, UserAssociationError> {
        self.repository
            .remove(user_id, kind, target_id)
            .await
            .map_err(|e| UserAssociationError::from_repository(e, kind))
    }

    async fn list(
        &self,
        user_id: UserId,
        kind: AssociationKind,
    ) -> Result<Vec<Uuid>, UserAssociationError> {
        self.repository
            .list(user_id, kind)
            .await
            .map_err(|e| UserAssociationError::from_repository(e, kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::AssociationRepositoryError;
    use mockall::mock;

    mock! {
        pub AssociationRepo {}
        #[async_trait]
        impl UserAssociationRepository for AssociationRepo {
            async fn add(&self, user_id: UserId, kind: AssociationKind, target_id: Uuid) -> Result<(), AssociationRepositoryError>;
            async fn remove(&self, user_id: UserId, kind: AssociationKind, target_id: Uuid) -> Result<bool, AssociationRepositoryError>;
            async fn list(&self, user_id: UserId, kind: AssociationKind) -> Result<Vec<Uuid>, AssociationRepositoryError>;
        }
    }

    #[tokio::test]
    async fn add_passes_through_to_repository() {
        let user_id = UserId::new();
        let topic = Uuid::new_v4();
        let mut repo = MockAssociationRepo::new();
        repo.expect_add()
            .withf(move |u, k, t| *u == user_id && *k == AssociationKind::Topic && *t == topic)
            .times(1)
            .returning(|_, _, _| Ok(()));

        let service = UserAssociationsService::new(repo);

        assert_eq!(service.add(user_id, AssociationKind::Topic, topic).await, Ok(()));
    }

    #[tokio::test]
    async fn add_with_missing_reference_names_the_kind() {
        let mut repo = MockAssociationRepo::new();
        repo.expect_add().returning(|_, _, _| {
            Err(AssociationRepositoryError::ReferenceNotFound(
                "fk_user_tasks_task_id".to_string(),
            ))
        });

        let service = UserAssociationsService::new(repo);

        let result = service
            .add(UserId::new(), AssociationKind::Task, Uuid::new_v4())
            .await;

        assert_eq!(
            result,
            Err(UserAssociationError::NotFound {
                kind: AssociationKind::Task
            })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "User or task not found"
        );
    }

    #[tokio::test]
    async fn remove_reports_whether_a_link_existed() {
        let mut repo = MockAssociationRepo::new();
        repo.expect_remove().returning(|_, _, _| Ok(false));

        let service = UserAssociationsService::new(repo);

        let removed = service
            .remove(UserId::new(), AssociationKind::Resource, Uuid::new_v4())
            .await;

        assert_eq!(removed, Ok(false));
    }

    #[tokio::test]
    async fn list_maps_database_errors() {
        let mut repo = MockAssociationRepo::new();
        repo.expect_list().returning(|_, _| {
            Err(AssociationRepositoryError::DatabaseError("timeout".to_string()))
        });

        let service = UserAssociationsService::new(repo);

        let result = service.list(UserId::new(), AssociationKind::SocialLink).await;

        assert_eq!(
            result,
            Err(UserAssociationError::RepositoryError("timeout".to_string()))
        );
    }
}
