/**
 * Registration Handler
 *
 * This module implements user registration for POST /auth/register.
 *
 * # Registration Process
 *
 * 1. Validate presence of all fields, password length, username length
 * 2. Check for an existing user with the same username or email
 * 3. Derive the avatar URL from the username
 * 4. Hash the password with bcrypt
 * 5. Create the user and issue an identity token
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt at DEFAULT_COST
 * - The password hash is never returned in responses
 */

use axum::{extract::State, http::StatusCode, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{AuthResponse, RegisterRequest, UserResponse};
use crate::auth::tokens::create_token;
use crate::auth::users::{create_user, profile_image_url, user_exists};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Validate a registration request
///
/// Validation order is fixed: field presence, password length, username
/// length, then (in the handler) the existence check. The first failure
/// wins.
pub fn validate_registration(request: &RegisterRequest) -> Result<(), ApiError> {
    if request.username.is_empty() || request.email.is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("All fields are required"));
    }

    if request.password.chars().count() < 6 {
        return Err(ApiError::validation(
            "Password must be at least 6 characters long",
        ));
    }

    if request.username.chars().count() < 3 {
        return Err(ApiError::validation(
            "Username must be at least 3 characters long",
        ));
    }

    Ok(())
}

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields, short password or username,
///   or a duplicate username/email
/// * `500 Internal Server Error` - Hashing, database, or token failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    tracing::info!("Registration request for username: {}", request.username);

    validate_registration(&request)?;

    // Single lookup covering both unique fields.
    if user_exists(&state.pool, &request.username, &request.email).await? {
        tracing::warn!("Username or email already taken: {}", request.username);
        return Err(ApiError::validation("Username or email already exists"));
    }

    let profile_image = profile_image_url(&request.username);
    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let user = create_user(
        &state.pool,
        request.username,
        request.email,
        password_hash,
        profile_image,
    )
    .await?;

    let token = create_token(&state.tokens, user.id)?;

    tracing::info!("User created: {} ({})", user.username, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            user: UserResponse::from(&user),
            token,
        }),
    ))
}
