//! Error Module
//!
//! This module defines the closed error taxonomy for the service.
//! Every handler returns `Result<_, ApiError>` and the error is mapped
//! exactly once, at the HTTP boundary, to a status code and JSON body.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Taxonomy
//!
//! - `Validation` - malformed or missing input (400)
//! - `Unauthenticated` - missing/invalid token or unknown identity (401)
//! - `InvalidCredentials` - wrong email or password at login (401)
//! - `Forbidden` - authenticated but not the owner (403)
//! - `NotFound` - referenced resource does not exist (404)
//! - `Upstream` - asset store failure (500)
//! - `Database` / `Hash` / `Jwt` - infrastructure failures (500)

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
