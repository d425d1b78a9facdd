//! Backend Error Module
//!
//! Error taxonomy for the HTTP surface and its conversion into responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Taxonomy
//!
//! - Validation errors (malformed or duplicate input) map to 400
//! - Credential errors (missing, invalid or expired) map to 401
//! - Unresolvable identifiers map to 404
//! - Storage and other internal failures map to 500 with a generic body

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
