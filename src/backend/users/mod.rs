//! Users Module
//!
//! User lookup and the symmetric friend relation.

/// Friendship database operations
pub mod db;

/// HTTP handlers for user endpoints
pub mod handlers;

pub use handlers::{get_user, get_user_friends, toggle_friend};
