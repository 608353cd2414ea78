mod create_superuser;
mod create_user;
mod delete_user;
mod fetch_user;
mod password;
mod user_associations;

pub use create_superuser::{CreateSuperuserCommand, CreateSuperuserError, CreateSuperuserUseCase};
pub use create_user::{CreateUserCommand, CreateUserError, CreateUserUseCase};
pub use delete_user::{DeleteUserError, DeleteUserUseCase};
pub use fetch_user::{FetchUserError, FetchUserUseCase};
pub use password::{CheckPasswordUseCase, PasswordError, SetPasswordUseCase};
pub use user_associations::{ManageUserAssociationsUseCase, UserAssociationError};
