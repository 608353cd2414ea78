use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::shared::db::{classify, StorageFault};
use crate::support::application::domain::entities::{OrganizationId, Support};
use crate::support::application::ports::outgoing::{
    NewSupport, SupportRepository, SupportRepositoryError,
};

use super::sea_orm_entity::supports::{
    ActiveModel as SupportActiveModel, Column as SupportColumn, Entity as SupportEntity,
};

#[derive(Debug, Clone)]
pub struct SupportRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SupportRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> SupportRepositoryError {
        match classify(e) {
            StorageFault::ForeignKeyViolation(msg) => SupportRepositoryError::ReferenceNotFound(msg),
            StorageFault::UniqueViolation(msg) | StorageFault::Other(msg) => {
                SupportRepositoryError::DatabaseError(msg)
            }
        }
    }
}

#[async_trait]
impl SupportRepository for SupportRepositoryPostgres {
    async fn create(&self, support: NewSupport) -> Result<Support, SupportRepositoryError> {
        let active = SupportActiveModel {
            id: Set(Uuid::new_v4()),
            supporter_type_id: Set(support.supporter_type),
            supporter_entity_id: Set(support.supporter_entity.into()),
            supported_type_id: Set(support.supported_type),
            supported_entity_id: Set(support.supported_entity.into()),
            creation_date: NotSet,
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Support>, SupportRepositoryError> {
        let row = SupportEntity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(row.map(Support::from))
    }

    async fn list_for_organization(
        &self,
        organization: OrganizationId,
    ) -> Result<Vec<Support>, SupportRepositoryError> {
        let org: Uuid = organization.into();

        let rows = SupportEntity::find()
            .filter(
                Condition::any()
                    .add(SupportColumn::SupporterEntityId.eq(org))
                    .add(SupportColumn::SupportedEntityId.eq(org)),
            )
            .order_by_desc(SupportColumn::CreationDate)
            .order_by_asc(SupportColumn::Id)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows.into_iter().map(Support::from).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), SupportRepositoryError> {
        let result = SupportEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SupportRepositoryError::NotFound);
        }

        Ok(())
    }
}
