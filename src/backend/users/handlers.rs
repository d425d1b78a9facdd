//! User HTTP Handlers
//!
//! Handlers for user lookup, friends listings and the symmetric friend
//! toggle. All three sit behind the authentication gate.

use axum::extract::{Path, State};
use axum::response::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::backend::auth::handlers::types::{FriendView, UserView};
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::backend::users::db;

/// Response of the friend toggle: both sides of the updated relation.
#[derive(Debug, Serialize)]
pub struct FriendPair {
    pub user: UserView,
    pub friend: UserView,
}

/// Handler for `GET /users/{id}`: the public view of a user.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserView>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound("user"))?;

    let user = get_user_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;

    let friends = db::friend_ids(&state.pool, id).await?;

    Ok(Json(UserView::from_user(user, friends)))
}

/// Handler for `GET /users/{id}/friends`: resolved friend profiles in insertion order.
///
/// A friend id with no matching record is silently skipped rather than
/// failing the whole call.
pub async fn get_user_friends(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<FriendView>>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound("user"))?;

    get_user_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;

    let mut friends = Vec::new();
    for friend_id in db::friend_ids(&state.pool, id).await? {
        match get_user_by_id(&state.pool, friend_id).await? {
            Some(friend) => friends.push(FriendView::from(friend)),
            None => tracing::warn!("Skipping dangling friend reference {friend_id}"),
        }
    }

    Ok(Json(friends))
}

/// Handler for `PATCH /users/{id}/{friend_id}`: the symmetric friend toggle.
///
/// Adds the relation in both directions when absent, removes both when
/// present; applying the toggle twice restores the original state.
pub async fn toggle_friend(
    State(state): State<AppState>,
    Path((id, friend_id)): Path<(String, String)>,
) -> Result<Json<FriendPair>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound("user"))?;
    let friend_id = Uuid::parse_str(&friend_id).map_err(|_| ApiError::NotFound("friend"))?;

    if id == friend_id {
        return Err(ApiError::Validation("a user cannot friend themselves".to_string()));
    }

    let user = get_user_by_id(&state.pool, id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    let friend = get_user_by_id(&state.pool, friend_id)
        .await?
        .ok_or(ApiError::NotFound("friend"))?;

    if db::are_friends(&state.pool, id, friend_id).await? {
        db::remove_friendship(&state.pool, id, friend_id).await?;
        tracing::info!("Removed friendship {id} <-> {friend_id}");
    } else {
        db::add_friendship(&state.pool, id, friend_id).await?;
        tracing::info!("Added friendship {id} <-> {friend_id}");
    }

    let user_friends = db::friend_ids(&state.pool, id).await?;
    let friend_friends = db::friend_ids(&state.pool, friend_id).await?;

    Ok(Json(FriendPair {
        user: UserView::from_user(user, user_friends),
        friend: UserView::from_user(friend, friend_friends),
    }))
}
