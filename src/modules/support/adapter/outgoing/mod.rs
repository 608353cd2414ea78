pub mod sea_orm_entity;
mod support_entity_type_repository_postgres;
mod support_repository_postgres;

pub use support_entity_type_repository_postgres::SupportEntityTypeRepositoryPostgres;
pub use support_repository_postgres::SupportRepositoryPostgres;
