//! Bookworm - Book-Logging Service
//!
//! Bookworm is a small HTTP service for a book-logging application:
//! users register and log in, then create, list, fetch, and delete book
//! records they own. Each record embeds an image hosted by an external
//! asset store.
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`server`** - Configuration, application state, app assembly
//! - **`routes`** - Route table and layers
//! - **`auth`** - Credential store, identity tokens, register/login
//! - **`middleware`** - Bearer-token authentication gate
//! - **`books`** - Book model, queries, and lifecycle handlers
//! - **`assets`** - HTTP client for the external image host
//! - **`error`** - Closed error taxonomy mapped once at the boundary
//!
//! # Request Flow
//!
//! Inbound request → auth middleware (protected routes only) → handler
//! → database and/or asset store → JSON response. Handlers return
//! `Result<_, ApiError>`; the error type carries the status mapping.
//!
//! # State Management
//!
//! `AppState` holds the database pool, token keys, and asset client.
//! All three are handles over shared resources, constructed once at
//! startup and cloned per request.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Book resource: model, queries, handlers
pub mod books;

/// Asset store client
pub mod assets;

/// Service error types
pub mod error;

// Re-export commonly used types
pub use error::ApiError;
pub use server::{AppState, Config};
