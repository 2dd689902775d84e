/**
 * Book Listing Handler
 *
 * This module implements GET /books (public): a paginated, newest-first
 * listing with the owner's public fields joined onto each row.
 */

use axum::{
    extract::{Query, State},
    response::Json,
};

use crate::books::db::{count_books, list_books};
use crate::books::handlers::types::{BookListResponse, ListQuery};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Default page when the query omits one
const DEFAULT_PAGE: i64 = 1;
/// Default page size when the query omits one
const DEFAULT_LIMIT: i64 = 10;

/// Number of pages needed to hold `total` items at `limit` per page
///
/// Ceiling division, written so no intermediate sum can overflow even
/// at `limit = i64::MAX`; zero items means zero pages.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if total <= 0 {
        0
    } else {
        (total - 1) / limit + 1
    }
}

/// Rows to skip before page `page` starts
///
/// `(page - 1) * limit` with checked arithmetic; `None` means the
/// product does not fit in an `i64` and the request is rejected.
pub fn page_offset(page: i64, limit: i64) -> Option<i64> {
    page.checked_sub(1)?.checked_mul(limit)
}

/// List-books handler
///
/// Query parameters `page` (default 1) and `limit` (default 10) control
/// the slice; `skip = (page - 1) * limit`.
///
/// # Errors
///
/// * `400 Bad Request` - Non-positive page or limit, or values so large
///   the skip offset does not fit in an `i64`
/// * `500 Internal Server Error` - Database failure
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<BookListResponse>, ApiError> {
    let page = query.page.unwrap_or(DEFAULT_PAGE);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    if page < 1 || limit < 1 {
        return Err(ApiError::validation("Page and limit must be positive"));
    }

    let skip = page_offset(page, limit)
        .ok_or_else(|| ApiError::validation("Page or limit is too large"))?;

    let total_books = count_books(&state.pool).await?;
    let books = list_books(&state.pool, limit, skip).await?;

    tracing::debug!(
        "Listed {} of {} books (page {}, limit {})",
        books.len(),
        total_books,
        page,
        limit
    );

    Ok(Json(BookListResponse {
        books,
        current_page: page,
        total_pages: total_pages(total_books, limit),
        total_books,
    }))
}
