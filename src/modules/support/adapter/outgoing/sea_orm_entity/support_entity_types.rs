use sea_orm::entity::prelude::*;

use crate::support::application::domain::entities::SupportEntityType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "support_entity_types")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SupportEntityType {
    fn from(model: Model) -> Self {
        SupportEntityType {
            id: model.id,
            name: model.name,
        }
    }
}
