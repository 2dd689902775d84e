//! Server Module
//!
//! Configuration loading, shared state, and application assembly.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment configuration
//! ├── state.rs  - Application state container
//! └── init.rs   - Database connection and app assembly
//! ```

/// Environment configuration
pub mod config;

/// Application state
pub mod state;

/// Database connection and app assembly
pub mod init;

pub use config::{Config, ConfigError};
pub use init::{build_state, connect_database, create_app};
pub use state::AppState;
