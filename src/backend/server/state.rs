//! Application State Management
//!
//! [`AppState`] is the central state container handed to the router. All
//! fields are cheap to clone: the sqlx pool is internally reference-counted
//! and the JWT keys are immutable after startup. `FromRef` implementations
//! let handlers extract just the piece of state they need.

use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::path::PathBuf;

use crate::backend::auth::sessions::Keys;

/// Application state shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool. Per-document atomicity comes from the
    /// storage layer; there is no application-level locking.
    pub pool: SqlitePool,

    /// Prebuilt signing/verification keys for session tokens.
    pub keys: Keys,

    /// Directory uploaded pictures are written to.
    pub assets_dir: PathBuf,
}

/// Allow handlers to extract the connection pool directly.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.pool.clone()
    }
}

/// Allow handlers to extract the token keys directly.
impl FromRef<AppState> for Keys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.keys.clone()
    }
}
