/**
 * API Error Types
 *
 * This module defines the error types used by HTTP handlers.
 * Each variant carries enough context to produce a response, and the
 * infrastructure variants keep their source error for diagnostics.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Service-wide error type
///
/// This enum represents every failure a handler can surface. Input and
/// authorization failures carry the client-facing message directly;
/// infrastructure failures (`Database`, `Hash`, `Jwt`) keep their source
/// for logging and render a generic message to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input
    #[error("{0}")]
    Validation(String),

    /// Missing, malformed, or invalid token, or token references an
    /// identity that no longer exists
    #[error("{0}")]
    Unauthenticated(String),

    /// Wrong email or password at login
    ///
    /// Both a missing account and a wrong password map here so the
    /// response does not reveal which field was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Authenticated but not permitted to touch the resource
    #[error("{0}")]
    Forbidden(String),

    /// Referenced resource id does not exist
    #[error("{0}")]
    NotFound(String),

    /// Asset store failure (upload or deletion)
    #[error("{0}")]
    Upstream(String),

    /// Database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Token creation failure
    #[error("Token error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create an unauthenticated error
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    /// Create a forbidden error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an upstream error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Unauthenticated(_) | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Database(_) | Self::Hash(_) | Self::Jwt(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-facing message
    ///
    /// Infrastructure failures render a generic message; the underlying
    /// error is logged at the conversion boundary, not leaked.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(message)
            | Self::Unauthenticated(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::Upstream(message) => message.clone(),
            Self::InvalidCredentials => "Invalid credentials".to_string(),
            Self::Database(_) | Self::Hash(_) | Self::Jwt(_) => {
                "Internal server error".to_string()
            }
        }
    }
}
