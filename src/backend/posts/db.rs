//! Database operations for posts and likes
//!
//! Posts denormalize the author's display fields at creation time; later
//! profile edits do not touch existing rows. Likes are a relation table
//! keyed on `(post_id, user_id)`, so the like set holds each user at most
//! once.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::backend::auth::users::{parse_timestamp, User};

/// A post record as stored.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: Uuid,
    /// Owning user. Non-owning reference; the row survives the author.
    pub user_id: Uuid,
    /// Author display fields captured at creation time.
    pub first_name: String,
    pub last_name: String,
    pub location: Option<String>,
    pub description: String,
    pub picture_path: Option<String>,
    pub user_picture_path: Option<String>,
    pub comment_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Insert a new post for an author, denormalizing the display fields.
pub async fn create_post(
    pool: &SqlitePool,
    author: &User,
    description: String,
    picture_path: Option<String>,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        "INSERT INTO posts (id, user_id, first_name, last_name, location, description,
                            picture_path, user_picture_path, comment_count, created_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, 0, ?)",
    )
    .bind(id.to_string())
    .bind(author.id.to_string())
    .bind(&author.first_name)
    .bind(&author.last_name)
    .bind(&author.location)
    .bind(&description)
    .bind(&picture_path)
    .bind(&author.picture_path)
    .bind(now.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(Post {
        id,
        user_id: author.id,
        first_name: author.first_name.clone(),
        last_name: author.last_name.clone(),
        location: author.location.clone(),
        description,
        picture_path,
        user_picture_path: author.picture_path.clone(),
        comment_count: 0,
        created_at: now,
    })
}

/// Get a post by id, or `None` if the id does not resolve.
pub async fn get_post(pool: &SqlitePool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, user_id, first_name, last_name, location, description,
                picture_path, user_picture_path, comment_count, created_at
         FROM posts
         WHERE id = ?",
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    row.map(|row| row_to_post(&row)).transpose()
}

/// All posts, newest first.
pub async fn list_feed(pool: &SqlitePool) -> Result<Vec<Post>, sqlx::Error> {
    let rows = sqlx::query(
        "SELECT id, user_id, first_name, last_name, location, description,
                picture_path, user_picture_path, comment_count, created_at
         FROM posts
         ORDER BY rowid DESC",
    )
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_post).collect()
}

/// One user's posts, newest first.
pub async fn list_for_user(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Post>, sqlx::Error> {
    let rows = sqlx::query(
        "SELECT id, user_id, first_name, last_name, location, description,
                picture_path, user_picture_path, comment_count, created_at
         FROM posts
         WHERE user_id = ?
         ORDER BY rowid DESC",
    )
    .bind(user_id.to_string())
    .fetch_all(pool)
    .await?;

    rows.iter().map(row_to_post).collect()
}

/// Identifiers in the post's like set, in insertion order.
pub async fn like_user_ids(pool: &SqlitePool, post_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
    let rows = sqlx::query("SELECT user_id FROM post_likes WHERE post_id = ? ORDER BY rowid")
        .bind(post_id.to_string())
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            Uuid::parse_str(&row.try_get::<String, _>("user_id").unwrap_or_default())
                .unwrap_or_default()
        })
        .collect())
}

/// Whether a user is in the post's like set.
pub async fn has_liked(pool: &SqlitePool, post_id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 FROM post_likes WHERE post_id = ? AND user_id = ?")
        .bind(post_id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

/// Add a user to the like set.
pub async fn insert_like(pool: &SqlitePool, post_id: Uuid, user_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT OR IGNORE INTO post_likes (post_id, user_id, created_at) VALUES (?, ?, ?)")
        .bind(post_id.to_string())
        .bind(user_id.to_string())
        .bind(Utc::now().to_rfc3339())
        .execute(pool)
        .await?;

    Ok(())
}

/// Remove a user from the like set.
pub async fn delete_like(pool: &SqlitePool, post_id: Uuid, user_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM post_likes WHERE post_id = ? AND user_id = ?")
        .bind(post_id.to_string())
        .bind(user_id.to_string())
        .execute(pool)
        .await?;

    Ok(())
}

fn row_to_post(row: &SqliteRow) -> Result<Post, sqlx::Error> {
    Ok(Post {
        id: Uuid::parse_str(&row.try_get::<String, _>("id")?).unwrap_or_default(),
        user_id: Uuid::parse_str(&row.try_get::<String, _>("user_id")?).unwrap_or_default(),
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        location: row.try_get("location")?,
        description: row.try_get("description")?,
        picture_path: row.try_get("picture_path")?,
        user_picture_path: row.try_get("user_picture_path")?,
        comment_count: row.try_get("comment_count")?,
        created_at: parse_timestamp(&row.try_get::<String, _>("created_at")?),
    })
}
