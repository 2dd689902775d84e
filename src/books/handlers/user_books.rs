/**
 * Own-Books Handler
 *
 * This module implements GET /books/user (protected): every book owned
 * by the authenticated identity, newest first.
 */

use axum::{extract::State, response::Json};

use crate::books::db::{list_books_by_owner, Book};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Own-books handler
///
/// # Errors
///
/// * `401 Unauthorized` - Rejected by the auth middleware
/// * `500 Internal Server Error` - Database failure
pub async fn user_books(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let books = list_books_by_owner(&state.pool, user.id).await?;

    tracing::debug!("User {} has {} books", user.id, books.len());

    Ok(Json(books))
}
