/**
 * Authentication Middleware
 *
 * This module provides the request gate for protected routes. It extracts
 * the bearer token from the Authorization header, verifies it, resolves
 * the identity in the credential store, and attaches the result to the
 * request's extensions. Rejection short-circuits before the handler runs.
 *
 * The core logic lives in `authenticate`, a plain function returning a
 * tagged result, so it can be tested and reused without an HTTP request.
 */

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::users::get_user_by_id;
use crate::auth::tokens::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated identity resolved by the guard
///
/// The public projection of the user behind the presented token. The
/// password hash is dropped at resolution time and never travels with
/// the request.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub profile_image: String,
}

/// Extract the bearer token from an Authorization header value
///
/// Expected form: `Bearer <token>`. Returns `None` when the header is
/// absent or the token segment is missing.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|t| !t.is_empty())
}

/// Authenticate a request from its headers
///
/// 1. Extract the bearer token
/// 2. Verify it against the configured keys
/// 3. Resolve the identity in the credential store
///
/// Exactly one store lookup per call; no mutation.
///
/// # Errors
///
/// * `Unauthenticated("No token provided")` - header absent or malformed
/// * `Unauthenticated("Token is not valid")` - bad signature or expired
/// * `Unauthenticated("User not found")` - token references no identity
pub async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<CurrentUser, ApiError> {
    let token = bearer_token(headers).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        ApiError::unauthenticated("No token provided")
    })?;

    let user_id = verify_token(&state.tokens, token).map_err(|e| {
        tracing::warn!("Token rejected: {}", e);
        ApiError::unauthenticated("Token is not valid")
    })?;

    let user = get_user_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token references unknown user: {}", user_id);
            ApiError::unauthenticated("User not found")
        })?;

    Ok(CurrentUser {
        id: user.id,
        username: user.username,
        email: user.email,
        profile_image: user.profile_image,
    })
}

/// Authentication middleware
///
/// Wraps protected routes. On success the resolved `CurrentUser` is
/// inserted into request extensions for the `AuthUser` extractor;
/// on failure the downstream handler is never invoked.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = authenticate(&state, request.headers()).await?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Used as a handler parameter on routes behind `auth_middleware`.
/// Rejects with 401 if the middleware did not run.
#[derive(Clone, Debug)]
pub struct AuthUser(pub CurrentUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("CurrentUser not found in request extensions");
                ApiError::unauthenticated("No token provided")
            })?;

        Ok(AuthUser(user))
    }
}
