use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::support::application::domain::entities::SupportEntityType;
use crate::support::application::ports::outgoing::{
    SupportEntityTypeRepository, SupportEntityTypeRepositoryError,
};

use super::sea_orm_entity::support_entity_types::{
    ActiveModel as TypeActiveModel, Column as TypeColumn, Entity as TypeEntity,
};

#[derive(Debug, Clone)]
pub struct SupportEntityTypeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SupportEntityTypeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> SupportEntityTypeRepositoryError {
        SupportEntityTypeRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl SupportEntityTypeRepository for SupportEntityTypeRepositoryPostgres {
    async fn create(
        &self,
        name: String,
    ) -> Result<SupportEntityType, SupportEntityTypeRepositoryError> {
        let active = TypeActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
        };

        let inserted = active.insert(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(inserted.into())
    }

    async fn list(&self) -> Result<Vec<SupportEntityType>, SupportEntityTypeRepositoryError> {
        let rows = TypeEntity::find()
            .order_by_asc(TypeColumn::Name)
            .all(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(rows.into_iter().map(SupportEntityType::from).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<(), SupportEntityTypeRepositoryError> {
        let result = TypeEntity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SupportEntityTypeRepositoryError::NotFound);
        }

        Ok(())
    }
}
