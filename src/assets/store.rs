/**
 * Asset Store Client
 *
 * This module implements the HTTP client for the external image-hosting
 * service. Uploads exchange a raw image payload (a data URL or remote
 * reference) for a durable URL; deletions are addressed by the asset id
 * embedded in that URL.
 *
 * The base URL is injected at construction time so tests can point the
 * client at a mock server.
 */

use serde::Deserialize;
use thiserror::Error;

/// Asset store failure
#[derive(Debug, Error)]
pub enum AssetError {
    /// Transport-level failure talking to the store
    #[error("asset store request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// The store answered but did not return a usable URL
    #[error("asset store returned no URL")]
    MissingUrl,
    /// The store answered with a non-success status
    #[error("asset store returned status {0}")]
    Failed(u16),
}

/// Upload response from the asset store
#[derive(Debug, Deserialize)]
struct UploadResponse {
    /// Durable URL of the stored asset
    #[serde(default)]
    secure_url: Option<String>,
}

/// Client handle for the external asset store
#[derive(Clone)]
pub struct AssetStore {
    client: reqwest::Client,
    base_url: String,
}

impl AssetStore {
    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Upload an image payload and return its durable URL
    ///
    /// # Errors
    ///
    /// Fails when the store is unreachable, answers with a non-success
    /// status, or omits the URL from its response.
    pub async fn upload(&self, image: &str) -> Result<String, AssetError> {
        let response = self
            .client
            .post(format!("{}/image/upload", self.base_url))
            .json(&serde_json::json!({ "file": image }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AssetError::Failed(response.status().as_u16()));
        }

        let body: UploadResponse = response.json().await?;
        body.secure_url
            .filter(|url| !url.is_empty())
            .ok_or(AssetError::MissingUrl)
    }

    /// Delete a previously stored asset by its id
    ///
    /// # Errors
    ///
    /// Fails when the store is unreachable or answers with a non-success
    /// status. Callers abort the surrounding workflow on failure.
    pub async fn delete(&self, asset_id: &str) -> Result<(), AssetError> {
        let response = self
            .client
            .post(format!("{}/image/destroy", self.base_url))
            .json(&serde_json::json!({ "public_id": asset_id }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AssetError::Failed(response.status().as_u16()));
        }

        Ok(())
    }

    /// Whether a URL points at an asset this store manages
    ///
    /// Deletion only touches the store for URLs it produced; anything
    /// else (for example a user-supplied external link) is left alone.
    pub fn is_managed_url(&self, url: &str) -> bool {
        url.starts_with(&self.base_url)
    }
}

/// Extract the asset id from a durable URL
///
/// The id is the last path segment with its file extension stripped,
/// mirroring how the store derives public ids from URLs.
pub fn asset_id_from_url(url: &str) -> Option<String> {
    let segment = url.split('/').next_back()?;
    if segment.is_empty() {
        return None;
    }
    let id = segment.split('.').next().unwrap_or(segment);
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
