//! Sociable - Main Library
//!
//! Sociable is a session-authenticated social networking backend built with
//! Rust. It exposes a JSON-over-HTTP API for registration and login, user
//! profiles, a symmetric friend relation, posts with a like set, and
//! multipart picture uploads served from a public asset prefix.
//!
//! # Overview
//!
//! This library provides the core functionality for Sociable, including:
//! - Registration and login with bcrypt password hashing
//! - Stateless JWT session tokens verified per request
//! - User, friend and post resources backed by SQLite via sqlx
//! - Multipart picture uploads stored under a configurable assets directory
//!
//! # Module Structure
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server with route configuration and middleware
//!   - Authentication, JWT tokens, user management
//!   - Post and friendship persistence
//!   - Upload storage and static asset serving
//!
//! # Usage
//!
//! ```rust,no_run
//! use sociable::backend::server::config::Config;
//! use sociable::backend::server::init::{connect_database, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env();
//! let pool = connect_database(&config).await?;
//! let app = create_app(pool, &config);
//! // Use app with Axum server
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! All shared state lives in `AppState`, which is cheaply cloneable: the
//! sqlx connection pool is internally synchronized and the JWT keys are
//! immutable after startup. Handlers hold no application-level locks.

/// Backend server-side code
pub mod backend;
