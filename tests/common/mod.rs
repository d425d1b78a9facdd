//! Shared test fixtures
//!
//! Spins the full application up against a single-connection in-memory
//! SQLite pool and a temporary assets directory, and provides helpers for
//! the register/login plumbing most scenarios start with.

#![allow(dead_code)]

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::multipart::MultipartForm;
use axum_test::TestServer;
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::TempDir;

use sociable::backend::server::config::Config;
use sociable::backend::server::init::{create_app, init_schema};

/// A running application plus the temp directory backing its asset store.
pub struct TestApp {
    pub server: TestServer,
    pub assets: TempDir,
}

/// Build the app against a fresh in-memory database.
pub async fn spawn_app() -> TestApp {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    init_schema(&pool).await.expect("failed to create schema");

    let assets = TempDir::new().expect("failed to create assets dir");

    let config = Config {
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret".to_string(),
        assets_dir: assets.path().to_path_buf(),
        max_upload_bytes: 5 * 1024 * 1024,
    };

    let server = TestServer::new(create_app(pool, &config)).expect("failed to start test server");

    TestApp { server, assets }
}

/// Register a user and return the created user body.
pub async fn register_user(
    server: &TestServer,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> serde_json::Value {
    let form = MultipartForm::new()
        .add_text("firstName", first_name)
        .add_text("lastName", last_name)
        .add_text("email", email)
        .add_text("password", password);

    let response = server.post("/auth/register").multipart(form).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json()
}

/// Log a user in and return the session token and user body.
pub async fn login_user(server: &TestServer, email: &str, password: &str) -> (String, serde_json::Value) {
    let response = server
        .post("/auth/login")
        .json(&serde_json::json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: serde_json::Value = response.json();
    let token = body["token"].as_str().expect("token missing").to_string();
    (token, body["user"].clone())
}

/// Register and log in, returning `(token, user)`.
pub async fn register_and_login(
    server: &TestServer,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> (String, serde_json::Value) {
    register_user(server, first_name, last_name, email, "password123").await;
    login_user(server, email, "password123").await
}

/// Bearer header pair for authenticated requests.
pub fn auth_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("authorization"),
        HeaderValue::from_str(&format!("Bearer {token}")).expect("invalid header value"),
    )
}
