pub mod database;

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::app::{build_auth_use_cases, build_support_use_cases};
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::application::AuthUseCases;
use crate::support::application::SupportUseCases;

/// Cheap argon2 parameters so tests stay fast.
pub fn fast_hasher() -> Arc<Argon2Hasher> {
    Arc::new(Argon2Hasher::with_params(1024, 1, 1).expect("Invalid test argon2 params"))
}

pub fn auth_use_cases(db: &Arc<DatabaseConnection>) -> AuthUseCases {
    build_auth_use_cases(Arc::clone(db), fast_hasher())
}

pub fn support_use_cases(db: &Arc<DatabaseConnection>) -> SupportUseCases {
    build_support_use_cases(Arc::clone(db))
}
