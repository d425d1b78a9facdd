//! Server Configuration
//!
//! Configuration is read from environment variables exactly once at process
//! start and carried as an explicit [`Config`] value; nothing else in the
//! crate consults the environment. Sensible defaults are provided for local
//! development, with the exception of the token signing secret, which should
//! always be set in a real deployment.

use std::path::PathBuf;

/// Default body-size ceiling for incoming requests (uploads included).
const DEFAULT_MAX_UPLOAD_BYTES: usize = 30 * 1024 * 1024;

/// Runtime configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// TCP port the server listens on.
    pub port: u16,
    /// sqlx connection string for the SQLite store.
    pub database_url: String,
    /// HMAC secret for signing session tokens.
    pub jwt_secret: String,
    /// Directory uploaded pictures are written to and served from.
    pub assets_dir: PathBuf,
    /// Request body ceiling in bytes.
    pub max_upload_bytes: usize,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Recognized variables: `SERVER_PORT`, `DATABASE_URL`, `JWT_SECRET`,
    /// `ASSETS_DIR`, `MAX_UPLOAD_BYTES`.
    pub fn from_env() -> Self {
        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(6001);

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:sociable.db?mode=rwc".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using an insecure development secret");
            "insecure-development-secret".to_string()
        });

        let assets_dir = std::env::var("ASSETS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public/assets"));

        let max_upload_bytes = std::env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES);

        Self {
            port,
            database_url,
            jwt_secret,
            assets_dir,
            max_upload_bytes,
        }
    }
}
