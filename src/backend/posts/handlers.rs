//! Post HTTP Handlers
//!
//! Handlers for post creation (multipart, with an optional picture), the
//! global and per-user feeds, and the like toggle. All sit behind the
//! authentication gate.

use axum::body::Bytes;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ApiError;
use crate::backend::posts::db::{self, Post};
use crate::backend::server::state::AppState;
use crate::backend::uploads;

/// Public view of a post record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub location: Option<String>,
    pub description: String,
    pub picture_path: Option<String>,
    pub user_picture_path: Option<String>,
    /// The like set as identifiers in insertion order.
    pub likes: Vec<Uuid>,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
}

impl PostView {
    fn new(post: Post, likes: Vec<Uuid>) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            first_name: post.first_name,
            last_name: post.last_name,
            location: post.location,
            description: post.description,
            picture_path: post.picture_path,
            user_picture_path: post.user_picture_path,
            likes,
            comment_count: post.comment_count,
            created_at: post.created_at,
        }
    }
}

/// Body of the like toggle.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleLikeRequest {
    pub user_id: Uuid,
}

/// Handler for `POST /posts`: create a post from a multipart body.
///
/// Text fields `userId` and `description`, optional file field `picture`.
/// The author's display fields are copied into the record at creation time
/// and deliberately not kept in sync with later profile edits.
pub async fn create_post(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<PostView>), ApiError> {
    let mut user_id = String::new();
    let mut description = String::new();
    let mut picture: Option<(String, Bytes)> = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match name.as_str() {
            "userId" => user_id = field.text().await?,
            "description" => description = field.text().await?,
            "picture" => {
                let file_name = field.file_name().unwrap_or_default().to_owned();
                let data = field.bytes().await?;
                if !file_name.is_empty() && !data.is_empty() {
                    picture = Some((file_name, data));
                }
            }
            _ => {
                let _ = field.bytes().await?;
            }
        }
    }

    let user_id = Uuid::parse_str(&user_id).map_err(|_| ApiError::NotFound("user"))?;

    let author = get_user_by_id(&state.pool, user_id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;

    if description.trim().is_empty() {
        return Err(ApiError::Validation("description is required".to_string()));
    }

    let picture_path = match picture {
        Some((file_name, data)) => {
            Some(uploads::store_picture(&state.assets_dir, &file_name, &data).await?)
        }
        None => None,
    };

    let post = db::create_post(&state.pool, &author, description, picture_path).await?;

    tracing::info!("Post {} created by {}", post.id, author.id);

    Ok((StatusCode::CREATED, Json(PostView::new(post, Vec::new()))))
}

/// Handler for `GET /posts`: every post, newest first.
pub async fn list_feed_posts(State(state): State<AppState>) -> Result<Json<Vec<PostView>>, ApiError> {
    let posts = db::list_feed(&state.pool).await?;
    Ok(Json(with_likes(&state, posts).await?))
}

/// Handler for `GET /posts/{user_id}`: one user's posts, newest first.
///
/// A user with no posts yields an empty list.
pub async fn list_user_posts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<PostView>>, ApiError> {
    let user_id = Uuid::parse_str(&user_id).map_err(|_| ApiError::NotFound("user"))?;

    let posts = db::list_for_user(&state.pool, user_id).await?;
    Ok(Json(with_likes(&state, posts).await?))
}

/// Handler for `PATCH /posts/{id}/like`: exclusive-or membership in the like set.
///
/// Present → removed, absent → added; applying the toggle twice restores
/// the original state.
pub async fn toggle_like(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ToggleLikeRequest>,
) -> Result<Json<PostView>, ApiError> {
    let post_id = Uuid::parse_str(&id).map_err(|_| ApiError::NotFound("post"))?;

    let post = db::get_post(&state.pool, post_id)
        .await?
        .ok_or(ApiError::NotFound("post"))?;

    if db::has_liked(&state.pool, post_id, request.user_id).await? {
        db::delete_like(&state.pool, post_id, request.user_id).await?;
    } else {
        db::insert_like(&state.pool, post_id, request.user_id).await?;
    }

    let likes = db::like_user_ids(&state.pool, post_id).await?;

    Ok(Json(PostView::new(post, likes)))
}

async fn with_likes(state: &AppState, posts: Vec<Post>) -> Result<Vec<PostView>, ApiError> {
    let mut views = Vec::with_capacity(posts.len());
    for post in posts {
        let likes = db::like_user_ids(&state.pool, post.id).await?;
        views.push(PostView::new(post, likes));
    }
    Ok(views)
}
