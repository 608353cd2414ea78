use async_trait::async_trait;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::support::application::domain::entities::{OrganizationId, Support};
use crate::support::application::ports::incoming::use_cases::{
    CreateSupportCommand, CreateSupportUseCase, DeleteSupportUseCase, GetSupportUseCase,
    ListOrganizationSupportsUseCase, SupportError,
};
use crate::support::application::ports::outgoing::{NewSupport, SupportRepository};

#[derive(Debug, Clone)]
pub struct SupportService<R>
where
    R: SupportRepository + Send + Sync,
{
    repository: R,
}

impl<R> SupportService<R>
where
    R: SupportRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateSupportUseCase for SupportService<R>
where
    R: SupportRepository + Send + Sync,
{
    async fn execute(&self, command: CreateSupportCommand) -> Result<Support, SupportError> {
        let data = NewSupport {
            supporter_type: command.supporter_type,
            supporter_entity: command.supporter_entity,
            supported_type: command.supported_type,
            supported_entity: command.supported_entity,
        };

        match self.repository.create(data).await {
            Ok(support) => {
                info!(
                    support_id = %support.id,
                    supporter = %support.supporter_entity,
                    supported = %support.supported_entity,
                    "Support created"
                );
                Ok(support)
            }
            Err(e) => {
                let err = SupportError::from(e);
                match &err {
                    SupportError::ReferenceNotFound(msg) => {
                        warn!(reference = %msg, "Support references a missing row")
                    }
                    other => error!(error = %other, "Support creation failed"),
                }
                Err(err)
            }
        }
    }
}

#[async_trait]
impl<R> GetSupportUseCase for SupportService<R>
where
    R: SupportRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<Option<Support>, SupportError> {
        Ok(self.repository.find_by_id(id).await?)
    }
}

#[async_trait]
impl<R> ListOrganizationSupportsUseCase for SupportService<R>
where
    R: SupportRepository + Send + Sync,
{
    async fn execute(&self, organization: OrganizationId) -> Result<Vec<Support>, SupportError> {
        Ok(self.repository.list_for_organization(organization).await?)
    }
}

#[async_trait]
impl<R> DeleteSupportUseCase for SupportService<R>
where
    R: SupportRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), SupportError> {
        self.repository.delete(id).await?;

        info!(support_id = %id, "Support deleted");
        Ok(())
    }
}
