pub mod sea_orm_entity;
pub mod security;
mod user_association_repository_postgres;
mod user_query_postgres;
mod user_repository_postgres;

pub use user_association_repository_postgres::UserAssociationRepositoryPostgres;
pub use user_query_postgres::UserQueryPostgres;
pub use user_repository_postgres::UserRepositoryPostgres;
