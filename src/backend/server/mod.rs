//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Environment-driven configuration
//! └── init.rs   - Database connection, schema and app creation
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::Config;
pub use init::{connect_database, create_app};
pub use state::AppState;
