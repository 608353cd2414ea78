use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    CheckPasswordUseCase, CreateSuperuserUseCase, CreateUserUseCase, DeleteUserUseCase,
    FetchUserUseCase, ManageUserAssociationsUseCase, SetPasswordUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub create_user: Arc<dyn CreateUserUseCase + Send + Sync>,
    pub create_superuser: Arc<dyn CreateSuperuserUseCase + Send + Sync>,
    pub set_password: Arc<dyn SetPasswordUseCase + Send + Sync>,
    pub check_password: Arc<dyn CheckPasswordUseCase + Send + Sync>,
    pub fetch_user: Arc<dyn FetchUserUseCase + Send + Sync>,
    pub delete_user: Arc<dyn DeleteUserUseCase + Send + Sync>,
    pub associations: Arc<dyn ManageUserAssociationsUseCase + Send + Sync>,
}
