/**
 * Router Configuration
 *
 * This module assembles the full route table and its layers.
 *
 * # Routes
 *
 * ## Authentication (public)
 * - `POST /auth/register` - User registration
 * - `POST /auth/login` - User login
 *
 * ## Books
 * - `GET /books` - Paginated public listing
 * - `GET /books/{id}` - Public single fetch
 * - `POST /books` - Create (requires bearer token)
 * - `GET /books/user` - Own books (requires bearer token)
 * - `DELETE /books/{id}` - Delete, owner only (requires bearer token)
 *
 * Protected routes sit behind the auth middleware layer; public routes
 * never touch it. `/books/user` is a literal segment and is matched
 * ahead of the `/books/{id}` capture.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::auth::handlers::{login, register};
use crate::error::ApiError;
use crate::books::handlers;
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `state` - Application state (pool, token keys, asset client)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(state: AppState) -> Router<()> {
    let public = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/books", get(handlers::list))
        .route("/books/{id}", get(handlers::get));

    let protected = Router::new()
        .route("/books", post(handlers::create))
        .route("/books/user", get(handlers::user_books))
        .route("/books/{id}", delete(handlers::delete))
        .layer(from_fn_with_state(state.clone(), auth_middleware));

    public
        .merge(protected)
        .fallback(|| async { ApiError::not_found("Route not found") })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
