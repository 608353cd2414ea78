use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

use crate::auth::application::domain::entities::{User, UserId};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub name: String,
    pub password: String,
    pub location: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub verified: bool,
    pub verification_method: String,
    pub verification_partner_id: Option<Uuid>,
    pub verification_code: Option<Uuid>,
    pub icon_id: Option<Uuid>,
    pub email: String,
    pub is_confirmed: bool,
    pub is_private: bool,
    pub is_high_risk: bool,
    pub is_active: bool,
    pub is_admin: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub last_login: Option<DateTimeWithTimeZone>,
    pub creation_date: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::VerificationPartnerId",
        to = "Column::Id",
        on_delete = "SetNull",
        on_update = "Cascade"
    )]
    VerificationPartner,
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        // Stamp here so every backend stores the same timestamp format
        if insert && matches!(self.creation_date, NotSet) {
            self.creation_date = Set(Utc::now().into());
        }

        Ok(self)
    }
}

impl From<Model> for User {
    fn from(model: Model) -> Self {
        User {
            id: UserId::from(model.id),
            username: model.username,
            name: model.name,
            password_hash: model.password,
            location: model.location,
            description: model.description,
            verified: model.verified,
            verification_method: model.verification_method,
            verification_partner: model.verification_partner_id.map(UserId::from),
            verification_code: model.verification_code,
            icon_id: model.icon_id,
            email: model.email,
            is_confirmed: model.is_confirmed,
            is_private: model.is_private,
            is_high_risk: model.is_high_risk,
            is_active: model.is_active,
            is_admin: model.is_admin,
            is_staff: model.is_staff,
            is_superuser: model.is_superuser,
            last_login: model.last_login.map(|t| t.with_timezone(&Utc)),
            creation_date: model.creation_date.with_timezone(&Utc),
        }
    }
}
