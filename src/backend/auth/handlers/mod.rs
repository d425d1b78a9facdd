//! Authentication Handlers
//!
//! HTTP handlers for the public authentication endpoints and the
//! current-user lookup.

/// Request/response types
pub mod types;

/// User registration handler (multipart)
pub mod register;

/// User login handler
pub mod login;

/// Current-user handler
pub mod me;

pub use login::login;
pub use me::me;
pub use register::register;
