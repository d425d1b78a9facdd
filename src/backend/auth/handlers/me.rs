//! Current-User Handler
//!
//! Implements `GET /auth/me`: resolves the authenticated identifier set by
//! the request gate back to its user record.

use axum::extract::State;
use axum::response::Json;

use crate::backend::auth::handlers::types::UserView;
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ApiError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::server::state::AppState;
use crate::backend::users::db::friend_ids;

/// Return the public view of the requesting user.
pub async fn me(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserView>, ApiError> {
    let user = get_user_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;

    let friends = friend_ids(&state.pool, user.id).await?;

    Ok(Json(UserView::from_user(user, friends)))
}
