//! Middleware Module
//!
//! Request-processing middleware. Currently this is the bearer-token gate
//! applied to every protected route.

pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
