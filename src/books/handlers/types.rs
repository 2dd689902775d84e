/**
 * Book Handler Types
 *
 * Request and response types for the book endpoints, plus the input
 * validation applied before any store or asset call.
 */

use serde::{Deserialize, Serialize};

use crate::books::db::BookWithOwner;
use crate::error::ApiError;

/// Book creation request
///
/// `image` is the raw payload submitted by the client (a data URL or a
/// remote reference), not the stored URL; the asset store produces the
/// durable URL at upload time.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreateBookRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Option<i32>,
}

impl CreateBookRequest {
    /// Validate the request
    ///
    /// All four fields are required; the rating must be in 1..=5.
    ///
    /// # Errors
    ///
    /// `ApiError::Validation` naming the first failed rule.
    pub fn validate(&self) -> Result<i32, ApiError> {
        let rating = match self.rating {
            Some(rating)
                if !self.title.is_empty()
                    && !self.caption.is_empty()
                    && !self.image.is_empty() =>
            {
                rating
            }
            _ => return Err(ApiError::validation("All fields are required")),
        };

        if !(1..=5).contains(&rating) {
            return Err(ApiError::validation("Rating must be between 1 and 5"));
        }

        Ok(rating)
    }
}

/// Pagination query parameters for the public listing
#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Paginated listing response
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct BookListResponse {
    pub books: Vec<BookWithOwner>,
    pub current_page: i64,
    pub total_pages: i64,
    pub total_books: i64,
}

/// Deletion confirmation
#[derive(Serialize, Debug)]
pub struct DeleteResponse {
    pub message: String,
}
