//! Route Configuration Module
//!
//! HTTP route configuration for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports
//! ├── router.rs     - Router assembly and ambient layers
//! └── api_routes.rs - API endpoint tables
//! ```

/// Main router creation
pub mod router;

/// API endpoint tables
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
