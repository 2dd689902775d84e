/**
 * Login Handler
 *
 * This module implements user authentication for POST /auth/login.
 *
 * # Authentication Process
 *
 * 1. Validate presence of email and password
 * 2. Look up the user by email
 * 3. Verify the password with bcrypt
 * 4. Issue an identity token
 *
 * # Security
 *
 * - An unknown email and a wrong password both return 401 with the same
 *   message, so the response never reveals which field was wrong
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Json};
use bcrypt::verify;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::tokens::create_token;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing email or password
/// * `401 Unauthorized` - Unknown email or wrong password
/// * `500 Internal Server Error` - Database or token failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Email and password are required"));
    }

    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(&state.pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", request.email);
            ApiError::InvalidCredentials
        })?;

    let valid = verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", user.username);
        return Err(ApiError::InvalidCredentials);
    }

    let token = create_token(&state.tokens, user.id)?;

    tracing::info!("User logged in: {} ({})", user.username, user.email);

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        user: UserResponse::from(&user),
        token,
    }))
}
