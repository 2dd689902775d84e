/**
 * Server Initialization
 *
 * This module assembles the application: it connects to the database,
 * runs migrations, builds the shared state, and produces the router.
 *
 * Unlike optional services, the database is mandatory: a missing
 * `DATABASE_URL` or a failed connection is fatal and the caller is
 * expected to terminate the process.
 */

use axum::Router;
use sqlx::PgPool;

use crate::assets::AssetStore;
use crate::auth::tokens::TokenKeys;
use crate::routes::create_router;
use crate::server::config::Config;
use crate::server::state::AppState;

/// Connect to the database and run migrations
///
/// # Errors
///
/// Returns the sqlx error when the connection cannot be established.
/// Migration failures are logged and tolerated (they may already have
/// been applied by a previous deployment).
pub async fn connect_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => tracing::info!("Database migrations completed"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing - database might not be up to date");
        }
    }

    Ok(pool)
}

/// Build the application state from configuration
pub fn build_state(config: &Config, pool: PgPool) -> AppState {
    AppState {
        pool,
        tokens: TokenKeys::new(&config.jwt_secret),
        assets: AssetStore::new(config.asset_store_url.clone()),
    }
}

/// Create the Axum application
///
/// Connects to the database, builds state, and wires the router.
///
/// # Errors
///
/// Returns the sqlx error when the database connection fails; startup
/// cannot proceed without it.
pub async fn create_app(config: &Config) -> Result<Router, sqlx::Error> {
    let pool = connect_database(&config.database_url).await?;
    let state = build_state(config, pool);
    Ok(create_router(state))
}
