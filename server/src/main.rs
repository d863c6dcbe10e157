use admin_server::services::users::{SeedOutcome, UserStoreError};
use admin_server::{config, db, routes, state};
use schema::USER_SCHEMA;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("database init failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("admin seed failed: {0}")]
    Seed(#[from] UserStoreError),
    #[error("server failed: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::Config::from_env()?;

    let pool = db::init_pool(&config.database_url, config.db_max_connections).await?;
    db::ensure_indexes(&pool, &USER_SCHEMA, db::USERS_TABLE).await?;

    let state = state::AppState::new(pool, config.site_root.clone(), config.pbkdf2_iterations);

    match &config.admin {
        Some(seed) => match state.users.seed_admin(seed).await? {
            SeedOutcome::Created(oid) => tracing::info!(%oid, "admin account created"),
            SeedOutcome::Existing(oid) => tracing::debug!(%oid, "admin account already present"),
        },
        None => tracing::warn!("ADMIN_ACCOUNT/ADMIN_PASSWORD not set; no admin seeded"),
    }

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, site_root = %config.site_root.display(), "admin server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
