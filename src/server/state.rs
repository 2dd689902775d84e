/**
 * Application State
 *
 * This module defines the state container handed to the router. All
 * handles are constructed once at startup and dependency-injected;
 * handlers receive them through Axum's `State` extractor.
 *
 * Every field is cheaply cloneable (`PgPool` and `reqwest::Client` are
 * handles over shared connections), so `AppState` itself is `Clone`.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::assets::AssetStore;
use crate::auth::tokens::TokenKeys;

/// Application state shared by all request handlers
///
/// # Fields
///
/// * `pool` - PostgreSQL connection pool (users and books)
/// * `tokens` - Signing/verification keys for identity tokens
/// * `assets` - Client for the external image-hosting service
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,
    /// Token signing and verification keys
    pub tokens: TokenKeys,
    /// Asset store client
    pub assets: AssetStore,
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for TokenKeys {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<AppState> for AssetStore {
    fn from_ref(state: &AppState) -> Self {
        state.assets.clone()
    }
}
