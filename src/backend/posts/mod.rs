//! Posts Module
//!
//! Post creation, feed listings and the like relation.

/// Post database operations
pub mod db;

/// HTTP handlers for post endpoints
pub mod handlers;

pub use handlers::{create_post, list_feed_posts, list_user_posts, toggle_like};
