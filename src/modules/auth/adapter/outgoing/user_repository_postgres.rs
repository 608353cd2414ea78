use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;
use tracing::debug;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::outgoing::{NewUser, UserRepository, UserRepositoryError};
use crate::shared::db::{classify, StorageFault};

use super::sea_orm_entity::users::{ActiveModel as UserActiveModel, Entity as UserEntity};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> UserRepositoryError {
        match classify(e) {
            StorageFault::UniqueViolation(_) => UserRepositoryError::UserAlreadyExists,
            StorageFault::ForeignKeyViolation(msg) => UserRepositoryError::ReferenceNotFound(msg),
            StorageFault::Other(msg) => UserRepositoryError::DatabaseError(msg),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, user: NewUser) -> Result<User, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(user.id.into()),
            username: Set(user.username),
            name: Set(user.name),
            password: Set(user.password_hash),
            location: Set(user.location),
            description: Set(user.description),
            verified: Set(user.verified),
            verification_method: Set(user.verification_method),
            verification_partner_id: Set(user.verification_partner.map(Into::into)),
            verification_code: Set(user.verification_code),
            icon_id: Set(user.icon_id),
            email: Set(user.email),
            is_confirmed: Set(user.is_confirmed),
            is_private: Set(user.is_private),
            is_high_risk: Set(user.is_high_risk),
            is_active: Set(user.is_active),
            is_admin: Set(user.is_admin),
            is_staff: Set(user.is_staff),
            is_superuser: Set(user.is_superuser),
            last_login: Set(user.last_login.map(Into::into)),
            creation_date: NotSet,
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        debug!(user_id = %inserted.id, "User row inserted");
        Ok(inserted.into())
    }

    async fn update_password(
        &self,
        user_id: UserId,
        new_password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let user = UserEntity::find_by_id(*user_id.as_uuid())
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(UserRepositoryError::UserNotFound)?;

        let mut active_user: UserActiveModel = user.into();
        active_user.password = Set(new_password_hash);

        active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        Ok(())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_by_id(*user_id.as_uuid())
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::adapter::outgoing::sea_orm_entity::users::Model as UserModel;
    use crate::auth::application::domain::user_fields::UserFields;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn new_user() -> NewUser {
        NewUser::from_fields(
            "testuser".to_string(),
            "test@example.com".to_string(),
            "hashed_password".to_string(),
            UserFields::default(),
        )
    }

    fn model_for(user: &NewUser) -> UserModel {
        UserModel {
            id: *user.id.as_uuid(),
            username: user.username.clone(),
            name: user.name.clone(),
            password: user.password_hash.clone(),
            location: user.location.clone(),
            description: user.description.clone(),
            verified: user.verified,
            verification_method: user.verification_method.clone(),
            verification_partner_id: None,
            verification_code: None,
            icon_id: None,
            email: user.email.clone(),
            is_confirmed: false,
            is_private: false,
            is_high_risk: false,
            is_active: user.is_active,
            is_admin: false,
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
            last_login: None,
            creation_date: Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_create_user_success() {
        let user = new_user();
        let model = model_for(&user);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model.clone()]])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let created = repository.create_user(user.clone()).await.unwrap();

        assert_eq!(created.id, user.id);
        assert_eq!(created.username, "testuser");
        assert_eq!(created.password_hash, "hashed_password");
        assert!(created.is_active);
    }

    #[tokio::test]
    async fn test_create_user_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection timeout".to_string())])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository.create_user(new_user()).await;

        match result {
            Err(UserRepositoryError::DatabaseError(msg)) => {
                assert!(msg.contains("connection timeout"))
            }
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_update_password_success() {
        let user = new_user();
        let model = model_for(&user);
        let updated = UserModel {
            password: "new_hash".to_string(),
            ..model.clone()
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model]])
            .append_query_results(vec![vec![updated]])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .update_password(user.id, "new_hash".to_string())
            .await;

        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn test_update_password_user_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<UserModel>::new()])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        let result = repository
            .update_password(UserId::new(), "new_hash".to_string())
            .await;

        assert_eq!(result, Err(UserRepositoryError::UserNotFound));
    }

    #[tokio::test]
    async fn test_delete_user_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        assert_eq!(repository.delete_user(UserId::new()).await, Ok(()));
    }

    #[tokio::test]
    async fn test_delete_user_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repository = UserRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repository.delete_user(UserId::new()).await,
            Err(UserRepositoryError::UserNotFound)
        );
    }
}
