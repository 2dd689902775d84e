//! Shared test helpers
//!
//! Provides state construction and request plumbing for integration
//! tests. Database-backed helpers read `DATABASE_URL` and are only used
//! by tests that stay ignored unless a PostgreSQL instance is available.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use bookworm::assets::AssetStore;
use bookworm::auth::tokens::TokenKeys;
use bookworm::routes::create_router;
use bookworm::server::AppState;

/// Signing secret used across the test suite
pub const TEST_SECRET: &str = "bookworm-test-secret";

/// Build application state against the given asset store base URL
///
/// Connects to `DATABASE_URL` and runs migrations. Panics with a clear
/// message when the variable is unset; callers are `#[ignore]`d tests.
pub async fn test_state(asset_base_url: &str) -> AppState {
    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for database-backed tests");
    let pool = PgPool::connect(&database_url)
        .await
        .expect("failed to connect to test database");
    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    AppState {
        pool,
        tokens: TokenKeys::new(TEST_SECRET),
        assets: AssetStore::new(asset_base_url),
    }
}

/// Build application state over a lazy pool that never connects
///
/// For tests exercising routing, validation, and auth rejection paths
/// that return before touching the database.
pub fn lazy_state(asset_base_url: &str) -> AppState {
    let pool = PgPool::connect_lazy("postgres://localhost/bookworm_unreachable")
        .expect("lazy pool construction should not fail");

    AppState {
        pool,
        tokens: TokenKeys::new(TEST_SECRET),
        assets: AssetStore::new(asset_base_url),
    }
}

/// Build a router over fresh test state
pub async fn test_app(asset_base_url: &str) -> Router {
    create_router(test_state(asset_base_url).await)
}

/// Send a JSON request and decode the JSON response
pub async fn send_json(
    app: &Router,
    method: &str,
    path: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json");

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = builder
        .body(match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        })
        .expect("failed to build request");

    let response = app.clone().oneshot(request).await.expect("request failed");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}

/// Generate a unique username so reruns never collide on uniqueness
pub fn unique_username(prefix: &str) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{}_{}", prefix, &suffix[..8])
}
