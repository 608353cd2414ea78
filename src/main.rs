use std::sync::Arc;

use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use authentication::app::{build_auth_use_cases, build_password_hasher};
use authentication::auth::application::ports::incoming::use_cases::{
    CreateSuperuserCommand, CreateSuperuserError, CreateUserError,
};
use authentication::config::AppConfig;
use authentication::shared::db;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting bootstrap...");

    let config = AppConfig::from_env().context("Invalid configuration")?;

    let db = db::connect(&config.database)
        .await
        .context("Database connection failed")?;

    Migrator::up(&db, None)
        .await
        .context("Applying migrations failed")?;
    info!("Migrations applied");

    let Some(superuser) = config.superuser else {
        info!("No superuser configured");
        return Ok(());
    };

    let hasher = build_password_hasher(&config.hasher).context("Invalid hasher settings")?;
    info!(algorithm = %config.hasher.algorithm, "Password hasher ready");
    let auth = build_auth_use_cases(Arc::new(db), hasher);

    let command = CreateSuperuserCommand::new(
        superuser.email,
        superuser.username.clone(),
        superuser.password,
    );

    match auth.create_superuser.execute(command).await {
        Ok(user) => info!(user_id = %user.id, username = %user.username, "Superuser created"),
        Err(CreateSuperuserError::CreateUser(CreateUserError::UserAlreadyExists)) => {
            warn!(username = %superuser.username, "Superuser already exists, skipping")
        }
        Err(e) => return Err(e).context("Creating superuser failed"),
    }

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error running bootstrap: {e:#}");
        std::process::exit(1);
    }
}
