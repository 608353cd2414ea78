use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::{UserQuery, UserQueryError};
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find_by_id(*user_id.as_uuid())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(User::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
    use uuid::Uuid;

    fn create_mock_user_model(id: Uuid) -> UserModel {
        UserModel {
            id,
            username: "testuser".to_string(),
            name: "Test User".to_string(),
            password: "hashed_password".to_string(),
            location: "Jakarta".to_string(),
            description: String::new(),
            verified: true,
            verification_method: "in_person".to_string(),
            verification_partner_id: None,
            verification_code: None,
            icon_id: None,
            email: "test@example.com".to_string(),
            is_confirmed: true,
            is_private: false,
            is_high_risk: false,
            is_active: true,
            is_admin: false,
            is_staff: false,
            is_superuser: false,
            last_login: None,
            creation_date: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_found() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![create_mock_user_model(id)]])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        let user = query.find_by_id(UserId::from(id)).await.unwrap().unwrap();

        assert_eq!(user.id, UserId::from(id));
        assert_eq!(user.password_hash, "hashed_password");
        assert_eq!(user.location, "Jakarta");
        assert!(user.verified);
    }

    #[tokio::test]
    async fn test_find_by_username_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        assert_eq!(query.find_by_username("ghost").await, Ok(None));
    }

    #[tokio::test]
    async fn test_find_by_username_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("Database error".to_string())])
            .into_connection();

        let query = UserQueryPostgres::new(Arc::new(db));

        let result = query.find_by_username("testuser").await;

        assert!(matches!(result, Err(UserQueryError::DatabaseError(_))));
    }
}
