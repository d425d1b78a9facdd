//! Router Configuration
//!
//! Assembles the public and protected route tables, mounts the static
//! asset service for uploaded pictures and applies the ambient layers:
//! request tracing, CORS and the body-size ceiling.

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::Json;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::backend::routes::api_routes::{protected_routes, public_routes};
use crate::backend::server::config::Config;
use crate::backend::server::state::AppState;

/// Create the application router.
///
/// Uploaded pictures are served read-only under `/assets`. The body limit
/// covers every route, multipart uploads included.
pub fn create_router(state: AppState, config: &Config) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(protected_routes(state.clone()))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fallback handler for unknown routes.
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "message": "no route found" })),
    )
}
