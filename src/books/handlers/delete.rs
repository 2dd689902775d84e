/**
 * Book Deletion Handler
 *
 * This module implements DELETE /books/{id} (protected).
 *
 * # Deletion Workflow
 *
 * 1. Fetch the record; 404 if absent
 * 2. Ownership check against the authenticated identity; 403 on mismatch
 * 3. If the image URL belongs to the asset store, delete the asset first;
 *    a failed asset deletion aborts with 500 and leaves the record intact
 * 4. Delete the record and confirm
 *
 * The two deletions are separate operations with no rollback: a crash
 * between them can leave a record whose asset is already gone.
 */

use axum::{
    extract::{Path, State},
    response::Json,
};
use uuid::Uuid;

use crate::assets::{asset_id_from_url, AssetStore};
use crate::books::db::{delete_book, get_book};
use crate::books::handlers::types::DeleteResponse;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Delete-book handler
///
/// # Errors
///
/// * `401 Unauthorized` - Rejected by the auth middleware
/// * `403 Forbidden` - Caller is not the owner
/// * `404 Not Found` - No book with this id
/// * `500 Internal Server Error` - Asset store or database failure
pub async fn delete(
    AuthUser(user): AuthUser,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let book = get_book(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("Book not found"))?;

    if book.user_id != user.id {
        tracing::warn!(
            "User {} attempted to delete book {} owned by {}",
            user.id,
            book.id,
            book.user_id
        );
        return Err(ApiError::forbidden(
            "You are not authorized to delete this book",
        ));
    }

    // Asset cleanup comes first; the record survives if it fails.
    if let Some(asset_id) = cleanup_asset_id(&state.assets, &book.image)? {
        state.assets.delete(&asset_id).await.map_err(|e| {
            tracing::error!("Failed to delete asset {}: {}", asset_id, e);
            ApiError::upstream("Error deleting image from asset store")
        })?;
    }

    delete_book(&state.pool, book.id).await?;

    tracing::info!("Book deleted: {} by owner {}", book.id, user.id);

    Ok(Json(DeleteResponse {
        message: "Book deleted successfully".to_string(),
    }))
}

/// Resolve the asset id to clean up for a book image.
///
/// External URLs need no cleanup and yield `None`. A store-managed URL
/// must yield an id; one we cannot parse aborts the deletion, since
/// skipping it would strand the asset with no record pointing at it.
fn cleanup_asset_id(assets: &AssetStore, image: &str) -> Result<Option<String>, ApiError> {
    if !assets.is_managed_url(image) {
        return Ok(None);
    }
    asset_id_from_url(image).map(Some).ok_or_else(|| {
        tracing::error!("Managed image URL has no extractable asset id: {}", image);
        ApiError::upstream("Error deleting image from asset store")
    })
}
