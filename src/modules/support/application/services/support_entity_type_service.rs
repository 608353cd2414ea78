use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::support::application::domain::entities::SupportEntityType;
use crate::support::application::ports::incoming::use_cases::{
    CreateSupportEntityTypeCommand, CreateSupportEntityTypeUseCase,
    DeleteSupportEntityTypeUseCase, ListSupportEntityTypesUseCase, SupportEntityTypeError,
};
use crate::support::application::ports::outgoing::SupportEntityTypeRepository;

#[derive(Debug, Clone)]
pub struct SupportEntityTypeService<R>
where
    R: SupportEntityTypeRepository + Send + Sync,
{
    repository: R,
}

impl<R> SupportEntityTypeService<R>
where
    R: SupportEntityTypeRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateSupportEntityTypeUseCase for SupportEntityTypeService<R>
where
    R: SupportEntityTypeRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateSupportEntityTypeCommand,
    ) -> Result<SupportEntityType, SupportEntityTypeError> {
        let created = self.repository.create(command.name().to_string()).await?;

        info!(id = %created.id, name = %created.name, "Support entity type created");
        Ok(created)
    }
}

#[async_trait]
impl<R> ListSupportEntityTypesUseCase for SupportEntityTypeService<R>
where
    R: SupportEntityTypeRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<SupportEntityType>, SupportEntityTypeError> {
        Ok(self.repository.list().await?)
    }
}

#[async_trait]
impl<R> DeleteSupportEntityTypeUseCase for SupportEntityTypeService<R>
where
    R: SupportEntityTypeRepository + Send + Sync,
{
    async fn execute(&self, id: Uuid) -> Result<(), SupportEntityTypeError> {
        match self.repository.delete(id).await {
            Ok(()) => {
                info!(id = %id, "Support entity type deleted");
                Ok(())
            }
            Err(e) => {
                warn!(id = %id, error = %e, "Support entity type deletion failed");
                Err(e.into())
            }
        }
    }
}
