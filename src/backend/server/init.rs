//! Server Initialization
//!
//! Database connection, schema creation and assembly of the Axum
//! application.
//!
//! # Initialization Process
//!
//! 1. Connect the SQLite pool (a failure here is fatal to the caller)
//! 2. Apply pragmas and create any missing tables
//! 3. Build `AppState` from the pool and the resolved configuration
//! 4. Create the router with all routes and middleware
//!
//! The schema is idempotent (`CREATE TABLE IF NOT EXISTS`), so startup on an
//! existing database file is a no-op.

use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::Keys;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::Config;
use crate::backend::server::state::AppState;

/// Connect to the configured database and initialize the schema.
///
/// Unlike services that degrade gracefully without a store, this API is
/// nothing but its store: callers treat an error here as fatal.
pub async fn connect_database(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database at {}", config.database_url);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;

    sqlx::query("PRAGMA journal_mode=WAL").execute(&pool).await?;
    sqlx::query("PRAGMA synchronous=NORMAL").execute(&pool).await?;

    init_schema(&pool).await?;

    tracing::info!("Database ready");
    Ok(pool)
}

/// Create all tables used by the service.
///
/// Identifiers are uuid strings and timestamps RFC 3339 strings, matching
/// how the data layer binds them. Friendships and likes are relation tables
/// keyed on the pair, so the "no duplicates" invariants hold structurally.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            picture_path TEXT,
            location TEXT,
            occupation TEXT,
            viewed_profile INTEGER NOT NULL DEFAULT 0,
            impressions INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    // Symmetric relation, stored in both directions. Insertion order is the
    // rowid order.
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS friendships (
            user_id TEXT NOT NULL,
            friend_id TEXT NOT NULL,
            created_at TEXT NOT NULL,
            PRIMARY KEY (user_id, friend_id)
        )",
    )
    .execute(pool)
    .await?;

    // Author display fields are denormalized at creation time and never
    // backfilled on later profile edits.
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS posts (
            id TEXT PRIMARY KEY,
            user_id TEXT NOT NULL,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            location TEXT,
            description TEXT NOT NULL,
            picture_path TEXT,
            user_picture_path TEXT,
            comment_count INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS post_likes (
            post_id TEXT NOT NULL,
            user_id TEXT NOT NULL,
            created_at TEXT NOT NULL,
            PRIMARY KEY (post_id, user_id)
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Build the application router from a connected pool and the resolved
/// configuration.
pub fn create_app(pool: SqlitePool, config: &Config) -> Router {
    let state = AppState {
        pool,
        keys: Keys::new(config.jwt_secret.as_bytes()),
        assets_dir: config.assets_dir.clone(),
    };

    create_router(state, config)
}
