pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_support_entity_types_table;
mod m20240601_000002_create_supports_table;
mod m20240601_000003_create_users_table;
mod m20240601_000004_create_user_association_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_support_entity_types_table::Migration),
            Box::new(m20240601_000002_create_supports_table::Migration),
            Box::new(m20240601_000003_create_users_table::Migration),
            Box::new(m20240601_000004_create_user_association_tables::Migration),
        ]
    }
}
