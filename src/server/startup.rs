use std::sync::Arc;

use crate::server::{
    config::Config,
    error::AppError,
    service::{identity::ClerkClient, storage::SupabaseStorage, token::TokenVerifier},
    state::AppState,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// automatically runs all pending SeaORM migrations, including the catalog route seed. This
/// function must complete successfully before the application can access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client shared by the identity provider and storage clients.
///
/// Redirects are disabled so that requests never leave the configured hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Wires the token verifier and external service clients into the application state.
///
/// # Returns
/// - `Ok(AppState)` - State ready to hand to the router
/// - `Err(AppError::ConfigErr)` - The configured JWT key could not be parsed
pub fn build_state(
    config: &Config,
    db: sea_orm::DatabaseConnection,
    http_client: reqwest::Client,
) -> Result<AppState, AppError> {
    let token_verifier = TokenVerifier::new(&config.jwt_key)?;
    let identity = ClerkClient::new(
        http_client.clone(),
        config.clerk_api_url.clone(),
        config.clerk_secret_key.clone(),
    );
    let storage = SupabaseStorage::new(
        http_client,
        config.supabase_url.clone(),
        config.supabase_service_key.clone(),
        config.storage_bucket.clone(),
    );

    Ok(AppState::new(
        db,
        token_verifier,
        Arc::new(identity),
        Arc::new(storage),
    ))
}
