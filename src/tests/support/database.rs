use std::sync::Arc;

use migration::{Migrator, MigratorTrait};
use sea_orm::sea_query::{Alias, ColumnDef, Expr, Query, Table};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use uuid::Uuid;

/// Tables owned by other domains that the schema points into.
pub const EXTERNAL_TABLES: [&str; 6] = [
    "organizations",
    "images",
    "resources",
    "social_links",
    "tasks",
    "topics",
];

/// Fresh in-memory SQLite database with stubbed external tables and
/// every migration applied.
pub async fn sqlite_db() -> Arc<DatabaseConnection> {
    // One connection, otherwise each pooled connection gets its own memory db
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open sqlite");

    let backend = db.get_database_backend();
    for table in EXTERNAL_TABLES {
        let stmt = Table::create()
            .table(Alias::new(table))
            .col(
                ColumnDef::new(Alias::new("id"))
                    .uuid()
                    .not_null()
                    .primary_key(),
            )
            .to_owned();
        db.execute(backend.build(&stmt))
            .await
            .expect("Failed to create external stub table");
    }

    Migrator::up(&db, None)
        .await
        .expect("Failed to apply migrations");

    Arc::new(db)
}

/// Inserts a row into one of [`EXTERNAL_TABLES`] and returns its id.
pub async fn insert_external(db: &DatabaseConnection, table: &str) -> Uuid {
    let id = Uuid::new_v4();
    let stmt = Query::insert()
        .into_table(Alias::new(table))
        .columns([Alias::new("id")])
        .values_panic([id.into()])
        .to_owned();

    db.execute(db.get_database_backend().build(&stmt))
        .await
        .expect("Failed to insert external row");

    id
}

pub async fn delete_external(db: &DatabaseConnection, table: &str, id: Uuid) {
    let stmt = Query::delete()
        .from_table(Alias::new(table))
        .and_where(Expr::col(Alias::new("id")).eq(id))
        .to_owned();

    db.execute(db.get_database_backend().build(&stmt))
        .await
        .expect("Failed to delete external row");
}

/// Number of rows in `table` whose `column` equals `id`.
pub async fn count_rows(db: &DatabaseConnection, table: &str, column: &str, id: Uuid) -> i64 {
    let stmt = Query::select()
        .expr_as(Expr::col(Alias::new(column)).count(), Alias::new("n"))
        .from(Alias::new(table))
        .and_where(Expr::col(Alias::new(column)).eq(id))
        .to_owned();

    db.query_one(db.get_database_backend().build(&stmt))
        .await
        .expect("Count query failed")
        .expect("Count query returned no row")
        .try_get::<i64>("", "n")
        .expect("Count column missing")
}
