//! Authentication Module
//!
//! This module handles user registration, login, and identity tokens.
//! It owns the credential store (user records) and the token service.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── tokens.rs       - Identity token creation and verification
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     └── login.rs    - User authentication handler
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are stateless JWTs signed with the configured secret,
//!   expiring 1 hour after issuance; there is no revocation list
//! - The password hash is excluded from every response projection

/// User data model and database operations
pub mod users;

/// Identity token creation and verification
pub mod tokens;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{login, register};
pub use tokens::{TokenError, TokenKeys};
