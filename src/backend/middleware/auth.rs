//! Authentication Middleware
//!
//! The request gate for protected routes. It extracts the bearer token from
//! the `Authorization` header, verifies it statelessly (signature and
//! expiry only, without consulting the store) and attaches the resolved user
//! identifier to the request extensions for downstream handlers.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::backend::auth::sessions::verify_token;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Authenticated user data resolved from the session token.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware.
///
/// 1. Extracts the token from the `Authorization: Bearer …` header
/// 2. Verifies signature and expiry
/// 3. Attaches [`AuthenticatedUser`] to the request extensions
///
/// A missing or malformed header yields "missing credential"; a failed
/// verification yields "invalid or expired credential". Both are 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::MissingCredential
        })?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::MissingCredential)?;

    let claims = verify_token(&state.keys, token)?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| ApiError::InvalidCredential)?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user set by [`auth_middleware`].
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl axum::extract::FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::MissingCredential
            })
    }
}
