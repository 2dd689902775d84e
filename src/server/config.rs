/**
 * Server Configuration
 *
 * This module loads server configuration from the environment into an
 * explicit struct, constructed once at startup and handed to the rest
 * of the application. There is no global configuration state.
 *
 * # Required Variables
 *
 * - `DATABASE_URL` - PostgreSQL connection string; startup is fatal
 *   without it
 * - `JWT_SECRET` - process-wide token-signing secret
 *
 * # Optional Variables
 *
 * - `ASSET_STORE_URL` - base URL of the image-hosting service
 * - `SERVER_PORT` - bind port, default 3000
 */

use thiserror::Error;

/// Default bind port
const DEFAULT_PORT: u16 = 3000;

/// Default asset store endpoint
const DEFAULT_ASSET_STORE_URL: &str = "https://api.cloudinary.com/v1_1/bookworm";

/// Configuration failure
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is absent
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Server configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Token-signing secret
    pub jwt_secret: String,
    /// Base URL of the asset store
    pub asset_store_url: String,
    /// Bind port
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// `ConfigError::MissingVar` when `DATABASE_URL` or `JWT_SECRET`
    /// is not set. Callers treat this as fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let asset_store_url = std::env::var("ASSET_STORE_URL")
            .unwrap_or_else(|_| DEFAULT_ASSET_STORE_URL.to_string());

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            database_url,
            jwt_secret,
            asset_store_url,
            port,
        })
    }
}
