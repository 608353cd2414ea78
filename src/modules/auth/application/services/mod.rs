mod create_superuser_service;
mod create_user_service;
mod delete_user_service;
mod fetch_user_service;
mod password_service;
mod user_associations_service;

pub use create_superuser_service::CreateSuperuserService;
pub use create_user_service::CreateUserService;
pub use delete_user_service::DeleteUserService;
pub use fetch_user_service::FetchUserService;
pub use password_service::PasswordService;
pub use user_associations_service::UserAssociationsService;
