pub mod password_hasher;
pub mod user_association_repository;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use user_association_repository::{AssociationRepositoryError, UserAssociationRepository};
pub use user_query::{UserQuery, UserQueryError};
pub use user_repository::{NewUser, UserRepository, UserRepositoryError};
