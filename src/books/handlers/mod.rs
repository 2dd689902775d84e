//! Book Handlers Module
//!
//! HTTP handlers for the book endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Request/response types and validation
//! ├── create.rs     - POST /books (protected)
//! ├── list.rs       - GET /books (public, paginated)
//! ├── get.rs        - GET /books/{id} (public)
//! ├── user_books.rs - GET /books/user (protected)
//! └── delete.rs     - DELETE /books/{id} (protected, owner only)
//! ```

/// Request/response types and validation
pub mod types;

/// Book creation handler
pub mod create;

/// Paginated listing handler
pub mod list;

/// Single book fetch handler
pub mod get;

/// Own-books handler
pub mod user_books;

/// Deletion handler
pub mod delete;

// Re-export commonly used types
pub use types::{BookListResponse, CreateBookRequest, DeleteResponse, ListQuery};

// Re-export handlers
pub use create::create;
pub use delete::delete;
pub use get::get;
pub use list::list;
pub use user_books::user_books;
