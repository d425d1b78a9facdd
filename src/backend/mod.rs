//! Backend Module
//!
//! This module contains all server-side code for the Sociable application:
//! an Axum HTTP server offering session-authenticated CRUD over users and
//! posts, a symmetric friend relation, a post like set, and multipart
//! picture uploads.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Registration, login, JWT tokens, user persistence
//! - **`middleware`** - Bearer-token request gate
//! - **`users`** - User lookup and the friend relation
//! - **`posts`** - Post creation, feeds and the like relation
//! - **`uploads`** - Multipart payload storage under the assets directory
//! - **`error`** - Error taxonomy and HTTP response conversion
//!
//! # Control Flow
//!
//! Request → router → (optional) auth middleware → handler → sqlx pool →
//! JSON response. Uploads are written to disk before the owning document is
//! persisted; the stored name travels on the document as `picture_path`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// User lookup and friend relation
pub mod users;

/// Posts and the like relation
pub mod posts;

/// Upload storage
pub mod uploads;

/// Re-export commonly used types
pub use error::ApiError;
pub use server::state::AppState;
