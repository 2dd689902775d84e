//! Middleware Module
//!
//! This module contains HTTP middleware for the server. Middleware runs
//! before handlers; currently the only stage is authentication.
//!
//! - **`auth`** - Bearer-token authentication gate for protected routes

pub mod auth;

pub use auth::{auth_middleware, authenticate, AuthUser, CurrentUser};
