//! Books Module
//!
//! This module owns the book resource: the database model and queries,
//! and the HTTP handlers for the create/list/fetch/delete lifecycle.
//!
//! Books are owned resources. Creation records the authenticated caller
//! as owner; only the owner may delete a record, and deletion removes
//! the hosted image first (see `handlers::delete`).

/// Book model and database operations
pub mod db;

/// HTTP handlers for book endpoints
pub mod handlers;

pub use db::{Book, BookOwner, BookWithOwner};
