/**
 * Book Creation Handler
 *
 * This module implements POST /books (protected).
 *
 * # Creation Process
 *
 * 1. Validate the input fields and rating bounds
 * 2. Upload the image payload to the asset store
 * 3. Persist the record with the returned URL and the caller as owner
 *
 * An upload that yields no usable URL aborts before anything is written.
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::books::db::{create_book, Book};
use crate::books::handlers::types::CreateBookRequest;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Create-book handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields or rating outside 1..=5
/// * `401 Unauthorized` - Rejected by the auth middleware
/// * `500 Internal Server Error` - Upload or database failure
pub async fn create(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Json(request): Json<CreateBookRequest>,
) -> Result<(StatusCode, Json<Book>), ApiError> {
    let rating = request.validate()?;

    tracing::info!("Creating book '{}' for user {}", request.title, user.id);

    let image_url = state.assets.upload(&request.image).await.map_err(|e| {
        tracing::error!("Image upload failed: {}", e);
        ApiError::upstream("Image upload failed")
    })?;

    let book = create_book(
        &state.pool,
        request.title,
        request.caption,
        image_url,
        rating,
        user.id,
    )
    .await?;

    tracing::info!("Book created: {}", book.id);

    Ok((StatusCode::CREATED, Json(book)))
}
