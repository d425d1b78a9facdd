//! Error Conversion
//!
//! Implements `IntoResponse` for [`ApiError`] so handlers can return it
//! directly. The response body is a JSON object with a single `message`
//! field; internal errors are logged here and answered with a generic
//! message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {self:?}");
        } else {
            tracing::debug!("request rejected ({}): {self}", status.as_u16());
        }

        let body = Json(serde_json::json!({ "message": self.message() }));
        (status, body).into_response()
    }
}
