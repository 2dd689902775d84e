/**
 * Single Book Fetch Handler
 *
 * This module implements GET /books/{id} (public): one record with the
 * owner's public fields joined, or 404.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::books::db::{get_book_with_owner, BookWithOwner};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Fetch-by-id handler
///
/// # Errors
///
/// * `404 Not Found` - No book with this id
/// * `500 Internal Server Error` - Database failure
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookWithOwner>, ApiError> {
    let book = get_book_with_owner(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Book not found"))?;

    Ok(Json(book))
}
