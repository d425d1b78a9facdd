//! Login Handler
//!
//! Implements `POST /auth/login`.
//!
//! # Security
//!
//! - Passwords are verified with bcrypt
//! - Unknown email and wrong password return the same 401 message
//! - The issued token embeds only the user identifier and timestamps

use axum::extract::State;
use axum::response::Json;
use bcrypt::verify;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, UserView};
use crate::backend::auth::sessions::create_token;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::users::db::friend_ids;

/// Login handler.
///
/// Verifies the email/password pair and returns a signed session token
/// together with the public user view.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Login request for {}", request.email);

    let user = get_user_by_email(&state.pool, &request.email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login for unknown email: {}", request.email);
            ApiError::BadCredentials
        })?;

    if !verify(&request.password, &user.password_hash)? {
        tracing::warn!("Invalid password for {}", request.email);
        return Err(ApiError::BadCredentials);
    }

    let token = create_token(&state.keys, user.id)?;
    let friends = friend_ids(&state.pool, user.id).await?;

    tracing::info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse {
        token,
        user: UserView::from_user(user, friends),
    }))
}
