use async_trait::async_trait;
use sea_orm::sea_query::{Alias, Expr, OnConflict, Order, Query};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::{AssociationKind, UserId};
use crate::auth::application::ports::outgoing::{
    AssociationRepositoryError, UserAssociationRepository,
};
use crate::shared::db::{classify, StorageFault};

const USER_COLUMN: &str = "user_id";

/// Join table and target column backing each association.
fn link_table(kind: AssociationKind) -> (&'static str, &'static str) {
    match kind {
        AssociationKind::Resource => ("user_resources", "resource_id"),
        AssociationKind::SocialLink => ("user_social_links", "social_link_id"),
        AssociationKind::Task => ("user_tasks", "task_id"),
        AssociationKind::Topic => ("user_topics", "topic_id"),
    }
}

#[derive(Clone, Debug)]
pub struct UserAssociationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserAssociationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> AssociationRepositoryError {
        match classify(e) {
            StorageFault::ForeignKeyViolation(msg) => {
                AssociationRepositoryError::ReferenceNotFound(msg)
            }
            StorageFault::UniqueViolation(msg) | StorageFault::Other(msg) => {
                AssociationRepositoryError::DatabaseError(msg)
            }
        }
    }
}

#[async_trait]
impl UserAssociationRepository for UserAssociationRepositoryPostgres {
    async fn add(
        &self,
        user_id: UserId,
        kind: AssociationKind,
        target_id: Uuid,
    ) -> Result<(), AssociationRepositoryError> {
        let (table, column) = link_table(kind);
        let stmt = Query::insert()
            .into_table(Alias::new(table))
            .columns([Alias::new(USER_COLUMN), Alias::new(column)])
            .values([(*user_id.as_uuid()).into(), target_id.into()])
            .map_err(|e| AssociationRepositoryError::DatabaseError(e.to_string()))?
            // Composite key conflict means the link already exists
            .on_conflict(
                OnConflict::columns([Alias::new(USER_COLUMN), Alias::new(column)])
                    .do_nothing()
                    .to_owned(),
            )
            .to_owned();

        let backend = self.db.get_database_backend();
        self.db
            .execute(backend.build(&stmt))
            .await
            .map_err(Self::map_db_err)?;

        Ok(())
    }

    async fn remove(
        &self,
        user_id: UserId,
        kind: AssociationKind,
        target_id: Uuid,
    ) -> Result<bool, AssociationRepositoryError> {
        let (table, column) = link_table(kind);
        let stmt = Query::delete()
            .from_table(Alias::new(table))
            .and_where(Expr::col(Alias::new(USER_COLUMN)).eq(*user_id.as_uuid()))
            .and_where(Expr::col(Alias::new(column)).eq(target_id))
            .to_owned();

        let backend = self.db.get_database_backend();
        let result = self
            .db
            .execute(backend.build(&stmt))
            .await
            .map_err(Self::map_db_err)?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(
        &self,
        user_id: UserId,
        kind: AssociationKind,
    ) -> Result<Vec<Uuid>, AssociationRepositoryError> {
        let (table, column) = link_table(kind);
        let stmt = Query::select()
            .column(Alias::new(column))
            .from(Alias::new(table))
            .and_where(Expr::col(Alias::new(USER_COLUMN)).eq(*user_id.as_uuid()))
            .order_by(Alias::new(column), Order::Asc)
            .to_owned();

        let backend = self.db.get_database_backend();
        let rows = self
            .db
            .query_all(backend.build(&stmt))
            .await
            .map_err(Self::map_db_err)?;

        rows.iter()
            .map(|row| {
                row.try_get::<Uuid>("", column)
                    .map_err(|e| AssociationRepositoryError::DatabaseError(e.to_string()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    fn exec(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    #[test]
    fn every_kind_has_its_own_table() {
        let tables: Vec<&str> = AssociationKind::ALL
            .iter()
            .map(|kind| link_table(*kind).0)
            .collect();

        assert_eq!(
            tables,
            vec!["user_resources", "user_social_links", "user_tasks", "user_topics"]
        );
    }

    #[tokio::test]
    async fn add_ignores_already_linked_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(0)])
            .into_connection();

        let repo = UserAssociationRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .add(UserId::new(), AssociationKind::Topic, Uuid::new_v4())
            .await;

        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn add_surfaces_database_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let repo = UserAssociationRepositoryPostgres::new(Arc::new(db));

        let result = repo
            .add(UserId::new(), AssociationKind::Resource, Uuid::new_v4())
            .await;

        assert!(
            matches!(result, Err(AssociationRepositoryError::DatabaseError(msg)) if msg.contains("connection reset"))
        );
    }

    #[tokio::test]
    async fn remove_reports_affected_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![exec(1), exec(0)])
            .into_connection();

        let repo = UserAssociationRepositoryPostgres::new(Arc::new(db));
        let user = UserId::new();
        let task = Uuid::new_v4();

        assert_eq!(repo.remove(user, AssociationKind::Task, task).await, Ok(true));
        assert_eq!(repo.remove(user, AssociationKind::Task, task).await, Ok(false));
    }

    #[tokio::test]
    async fn list_reads_target_ids() {
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let rows = vec![
            BTreeMap::from([("social_link_id", Value::from(first))]),
            BTreeMap::from([("social_link_id", Value::from(second))]),
        ];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![rows])
            .into_connection();

        let repo = UserAssociationRepositoryPostgres::new(Arc::new(db));

        let ids = repo
            .list(UserId::new(), AssociationKind::SocialLink)
            .await
            .unwrap();

        assert_eq!(ids, vec![first, second]);
    }
}
