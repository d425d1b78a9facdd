//! Database operations for the friend relation
//!
//! Friendships are stored as one row per direction with a primary key on
//! the pair: the symmetric and no-duplicate invariants hold structurally,
//! and `INSERT OR IGNORE` keeps concurrent toggles idempotent per row.

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Friend identifiers of a user, in insertion order.
pub async fn friend_ids(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Uuid>, sqlx::Error> {
    let rows = sqlx::query(
        "SELECT friend_id FROM friendships WHERE user_id = ? ORDER BY rowid",
    )
    .bind(user_id.to_string())
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| {
            Uuid::parse_str(&row.try_get::<String, _>("friend_id").unwrap_or_default())
                .unwrap_or_default()
        })
        .collect())
}

/// Whether the relation holds between two users.
pub async fn are_friends(pool: &SqlitePool, user_id: Uuid, friend_id: Uuid) -> Result<bool, sqlx::Error> {
    let row = sqlx::query("SELECT 1 FROM friendships WHERE user_id = ? AND friend_id = ?")
        .bind(user_id.to_string())
        .bind(friend_id.to_string())
        .fetch_optional(pool)
        .await?;

    Ok(row.is_some())
}

/// Add the relation in both directions.
pub async fn add_friendship(pool: &SqlitePool, user_id: Uuid, friend_id: Uuid) -> Result<(), sqlx::Error> {
    let now = Utc::now().to_rfc3339();

    sqlx::query("INSERT OR IGNORE INTO friendships (user_id, friend_id, created_at) VALUES (?, ?, ?)")
        .bind(user_id.to_string())
        .bind(friend_id.to_string())
        .bind(&now)
        .execute(pool)
        .await?;

    sqlx::query("INSERT OR IGNORE INTO friendships (user_id, friend_id, created_at) VALUES (?, ?, ?)")
        .bind(friend_id.to_string())
        .bind(user_id.to_string())
        .bind(&now)
        .execute(pool)
        .await?;

    Ok(())
}

/// Remove the relation in both directions.
pub async fn remove_friendship(pool: &SqlitePool, user_id: Uuid, friend_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        "DELETE FROM friendships
         WHERE (user_id = ? AND friend_id = ?) OR (user_id = ? AND friend_id = ?)",
    )
    .bind(user_id.to_string())
    .bind(friend_id.to_string())
    .bind(friend_id.to_string())
    .bind(user_id.to_string())
    .execute(pool)
    .await?;

    Ok(())
}
