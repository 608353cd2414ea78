use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::support::application::domain::entities::{OrganizationId, Support};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "supports")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub supporter_type_id: Uuid,
    pub supporter_entity_id: Uuid,
    pub supported_type_id: Uuid,
    pub supported_entity_id: Uuid,
    pub creation_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::support_entity_types::Entity",
        from = "Column::SupporterTypeId",
        to = "super::support_entity_types::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    SupporterType,

    #[sea_orm(
        belongs_to = "super::support_entity_types::Entity",
        from = "Column::SupportedTypeId",
        to = "super::support_entity_types::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    SupportedType,
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert && matches!(self.creation_date, NotSet) {
            self.creation_date = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl From<Model> for Support {
    fn from(model: Model) -> Self {
        Support {
            id: model.id,
            supporter_type: model.supporter_type_id,
            supporter_entity: OrganizationId::from(model.supporter_entity_id),
            supported_type: model.supported_type_id,
            supported_entity: OrganizationId::from(model.supported_entity_id),
            creation_date: model.creation_date.with_timezone(&Utc),
        }
    }
}
