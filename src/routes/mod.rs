//! Routes Module
//!
//! Route table assembly. See `router` for the full endpoint list and
//! which routes sit behind the authentication layer.

pub mod router;

pub use router::create_router;
