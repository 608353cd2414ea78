// src/shared/db.rs
use std::time::Duration;

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, SqlErr};
use tracing::info;

use crate::config::DatabaseConfig;

/// How a storage error should surface to the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageFault {
    UniqueViolation(String),
    ForeignKeyViolation(String),
    Other(String),
}

/// Sorts a driver error into constraint violations and everything else.
/// Messages are kept verbatim.
pub fn classify(err: DbErr) -> StorageFault {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => StorageFault::UniqueViolation(msg),
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => StorageFault::ForeignKeyViolation(msg),
        _ => StorageFault::Other(err.to_string()),
    }
}

pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .sqlx_logging(config.sqlx_logging);

    let db = Database::connect(options).await?;
    info!(
        backend = ?db.get_database_backend(),
        max_connections = config.max_connections,
        "Database connection established"
    );
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_errors_are_not_constraint_violations() {
        let fault = classify(DbErr::Custom("connection timeout".to_string()));

        match fault {
            StorageFault::Other(msg) => assert!(msg.contains("connection timeout")),
            other => panic!("Expected Other, got {:?}", other),
        }
    }

    #[test]
    fn record_not_found_is_kept_verbatim() {
        let fault = classify(DbErr::RecordNotFound("users".to_string()));

        assert!(matches!(fault, StorageFault::Other(msg) if msg.contains("users")));
    }
}
