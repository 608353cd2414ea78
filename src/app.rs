use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::auth::adapter::outgoing::security::PasswordHashingService;
use crate::auth::adapter::outgoing::{
    UserAssociationRepositoryPostgres, UserQueryPostgres, UserRepositoryPostgres,
};
use crate::auth::application::ports::outgoing::{HashError, PasswordHasher};
use crate::auth::application::services::{
    CreateSuperuserService, CreateUserService, DeleteUserService, FetchUserService,
    PasswordService, UserAssociationsService,
};
use crate::auth::application::AuthUseCases;
use crate::config::HasherConfig;
use crate::support::adapter::outgoing::{
    SupportEntityTypeRepositoryPostgres, SupportRepositoryPostgres,
};
use crate::support::application::services::{SupportEntityTypeService, SupportService};
use crate::support::application::SupportUseCases;

pub fn build_password_hasher(config: &HasherConfig) -> Result<Arc<dyn PasswordHasher>, HashError> {
    Ok(Arc::new(PasswordHashingService::from_config(config)?))
}

pub fn build_auth_use_cases(
    db: Arc<DatabaseConnection>,
    password_hasher: Arc<dyn PasswordHasher>,
) -> AuthUseCases {
    let user_repository = UserRepositoryPostgres::new(Arc::clone(&db));
    let user_query = UserQueryPostgres::new(Arc::clone(&db));

    let create_user = Arc::new(CreateUserService::new(
        user_repository.clone(),
        Arc::clone(&password_hasher),
    ));
    let create_superuser = Arc::new(CreateSuperuserService::new(create_user.clone()));
    let password = Arc::new(PasswordService::new(
        user_query.clone(),
        user_repository.clone(),
        password_hasher,
    ));

    AuthUseCases {
        create_user,
        create_superuser,
        set_password: password.clone(),
        check_password: password,
        fetch_user: Arc::new(FetchUserService::new(user_query)),
        delete_user: Arc::new(DeleteUserService::new(user_repository)),
        associations: Arc::new(UserAssociationsService::new(
            UserAssociationRepositoryPostgres::new(db),
        )),
    }
}

pub fn build_support_use_cases(db: Arc<DatabaseConnection>) -> SupportUseCases {
    let types = Arc::new(SupportEntityTypeService::new(
        SupportEntityTypeRepositoryPostgres::new(Arc::clone(&db)),
    ));
    let supports = Arc::new(SupportService::new(SupportRepositoryPostgres::new(db)));

    SupportUseCases {
        create_type: types.clone(),
        list_types: types.clone(),
        delete_type: types,
        create: supports.clone(),
        get: supports.clone(),
        list_for_organization: supports.clone(),
        delete: supports,
    }
}
