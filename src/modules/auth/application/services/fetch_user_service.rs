use async_trait::async_trait;

use crate::auth::application::domain::entities::{User, UserId};
use crate::auth::application::ports::incoming::use_cases::{FetchUserError, FetchUserUseCase};
use crate::auth::application::ports::outgoing::UserQuery;

pub struct FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    user_query: Q,
}

impl<Q> FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { user_query: query }
    }
}

#[async_trait]
impl<Q> FetchUserUseCase for FetchUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn by_id(&self, user_id: UserId) -> Result<Option<User>, FetchUserError> {
        Ok(self.user_query.find_by_id(user_id).await?)
    }

    async fn by_username(&self, username: &str) -> Result<Option<User>, FetchUserError> {
        Ok(self.user_query.find_by_username(username).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::ports::outgoing::UserQueryError;
    use chrono::Utc;

    struct MockUserQuery {
        result: Result<Option<User>, UserQueryError>,
    }

    #[async_trait]
    impl UserQuery for MockUserQuery {
        async fn find_by_id(&self, _user_id: UserId) -> Result<Option<User>, UserQueryError> {
            self.result.clone()
        }

        async fn find_by_username(&self, _username: &str) -> Result<Option<User>, UserQueryError> {
            self.result.clone()
        }
    }

    fn sample_user() -> User {
        User {
            id: UserId::new(),
            username: "testuser".to_string(),
            name: "Test User".to_string(),
            password_hash: "hash".to_string(),
            location: String::new(),
            description: String::new(),
            verified: false,
            verification_method: String::new(),
            verification_partner: None,
            verification_code: None,
            icon_id: None,
            email: "test@example.com".to_string(),
            is_confirmed: false,
            is_private: false,
            is_high_risk: false,
            is_active: true,
            is_admin: false,
            is_staff: false,
            is_superuser: false,
            last_login: None,
            creation_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_fetch_user_by_id_success() {
        let user = sample_user();
        let service = FetchUserService::new(MockUserQuery {
            result: Ok(Some(user.clone())),
        });

        let result = service.by_id(user.id).await;

        assert_eq!(result, Ok(Some(user)));
    }

    #[tokio::test]
    async fn test_fetch_user_by_username_missing() {
        let service = FetchUserService::new(MockUserQuery { result: Ok(None) });

        let result = service.by_username("ghost").await;

        assert_eq!(result, Ok(None));
    }

    #[tokio::test]
    async fn test_fetch_user_query_error() {
        let service = FetchUserService::new(MockUserQuery {
            result: Err(UserQueryError::DatabaseError("db down".to_string())),
        });

        let result = service.by_id(UserId::new()).await;

        assert!(matches!(result, Err(FetchUserError::QueryError(msg)) if msg.contains("db down")));
    }
}
