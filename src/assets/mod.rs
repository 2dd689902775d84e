//! Asset Store Module
//!
//! HTTP client for the external image-hosting service. Book creation
//! uploads the submitted image here and stores the returned URL; book
//! deletion asks the store to drop the asset before the record goes.
//!
//! The two stores are not transactional: a crash between asset deletion
//! and record deletion can leave a record whose image is already gone.
//! No compensation is attempted.

pub mod store;

pub use store::{asset_id_from_url, AssetError, AssetStore};
