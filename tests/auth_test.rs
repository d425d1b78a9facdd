//! Authentication flow tests
//!
//! Registration, login and the bearer-token gate, driven through the full
//! router.

mod common;

use axum::http::StatusCode;
use axum_test::multipart::MultipartForm;
use pretty_assertions::assert_eq;

use common::{auth_header, login_user, register_user, spawn_app};

#[tokio::test]
async fn register_returns_created_user_without_password_material() {
    let app = spawn_app().await;

    let form = MultipartForm::new()
        .add_text("firstName", "Ada")
        .add_text("lastName", "Lovelace")
        .add_text("email", "ada@example.com")
        .add_text("password", "password123")
        .add_text("location", "London")
        .add_text("occupation", "Engineer");

    let response = app.server.post("/auth/register").multipart(form).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: serde_json::Value = response.json();
    assert_eq!(body["firstName"], "Ada");
    assert_eq!(body["lastName"], "Lovelace");
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["location"], "London");
    assert_eq!(body["viewedProfile"], 0);
    assert_eq!(body["impressions"], 0);
    assert_eq!(body["friends"], serde_json::json!([]));

    // The password, in any form, never reaches the wire.
    let raw = response.text();
    assert!(!raw.contains("password123"));
    assert!(!raw.to_lowercase().contains("password"));
}

#[tokio::test]
async fn register_rejects_duplicate_email_without_second_record() {
    let app = spawn_app().await;

    register_user(&app.server, "Ada", "Lovelace", "ada@example.com", "password123").await;

    let form = MultipartForm::new()
        .add_text("firstName", "Imposter")
        .add_text("lastName", "Lovelace")
        .add_text("email", "ada@example.com")
        .add_text("password", "password456");

    let response = app.server.post("/auth/register").multipart(form).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "email already registered");

    // The original record is untouched: the first password still works.
    let (_, user) = login_user(&app.server, "ada@example.com", "password123").await;
    assert_eq!(user["firstName"], "Ada");
}

#[tokio::test]
async fn register_rejects_invalid_input() {
    let app = spawn_app().await;

    let missing_name = MultipartForm::new()
        .add_text("firstName", "")
        .add_text("lastName", "Lovelace")
        .add_text("email", "ada@example.com")
        .add_text("password", "password123");
    let response = app.server.post("/auth/register").multipart(missing_name).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let bad_email = MultipartForm::new()
        .add_text("firstName", "Ada")
        .add_text("lastName", "Lovelace")
        .add_text("email", "not-an-email")
        .add_text("password", "password123");
    let response = app.server.post("/auth/register").multipart(bad_email).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let short_password = MultipartForm::new()
        .add_text("firstName", "Ada")
        .add_text("lastName", "Lovelace")
        .add_text("email", "ada@example.com")
        .add_text("password", "short");
    let response = app.server.post("/auth/register").multipart(short_password).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_succeeds_with_valid_credentials() {
    let app = spawn_app().await;

    register_user(&app.server, "Ada", "Lovelace", "ada@example.com", "password123").await;
    let (token, user) = login_user(&app.server, "ada@example.com", "password123").await;

    assert!(!token.is_empty());
    assert_eq!(user["email"], "ada@example.com");
}

#[tokio::test]
async fn login_rejects_wrong_password_and_unknown_email_alike() {
    let app = spawn_app().await;

    register_user(&app.server, "Ada", "Lovelace", "ada@example.com", "password123").await;

    let wrong_password = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({ "email": "ada@example.com", "password": "wrongpassword" }))
        .await;
    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);

    let unknown_email = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({ "email": "nobody@example.com", "password": "password123" }))
        .await;
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);

    // Same message both ways: no account enumeration.
    let a: serde_json::Value = wrong_password.json();
    let b: serde_json::Value = unknown_email.json();
    assert_eq!(a["message"], b["message"]);
}

#[tokio::test]
async fn me_returns_current_user_for_valid_token() {
    let app = spawn_app().await;

    register_user(&app.server, "Ada", "Lovelace", "ada@example.com", "password123").await;
    let (token, _) = login_user(&app.server, "ada@example.com", "password123").await;

    let (name, value) = auth_header(&token);
    let response = app.server.get("/auth/me").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], "ada@example.com");
}

#[tokio::test]
async fn protected_route_rejects_missing_credential() {
    let app = spawn_app().await;

    let response = app.server.get("/auth/me").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "missing credential");
}

#[tokio::test]
async fn protected_route_rejects_tampered_token() {
    let app = spawn_app().await;

    register_user(&app.server, "Ada", "Lovelace", "ada@example.com", "password123").await;
    let (token, _) = login_user(&app.server, "ada@example.com", "password123").await;

    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    let (name, value) = auth_header(&tampered);
    let response = app.server.get("/auth/me").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "invalid or expired credential");
}
