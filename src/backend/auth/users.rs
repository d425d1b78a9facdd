//! User Model and Database Operations
//!
//! Identifiers are bound as uuid strings and timestamps as RFC 3339
//! strings; `row_to_user` parses them back.

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// A user record as stored.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Unique across the table.
    pub email: String,
    /// bcrypt hash; the plaintext is never stored.
    pub password_hash: String,
    /// Stored asset name of the profile picture, if one was uploaded.
    pub picture_path: Option<String>,
    pub location: Option<String>,
    pub occupation: Option<String>,
    pub viewed_profile: i64,
    pub impressions: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a user. Counters start at zero and the friend
/// list starts empty.
#[derive(Debug)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub picture_path: Option<String>,
    pub location: Option<String>,
    pub occupation: Option<String>,
}

/// Insert a new user and return the stored record.
pub async fn create_user(pool: &SqlitePool, new: NewUser) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        "INSERT INTO users (id, first_name, last_name, email, password_hash, picture_path,
                            location, occupation, viewed_profile, impressions, created_at, updated_at)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, 0, 0, ?, ?)",
    )
    .bind(id.to_string())
    .bind(&new.first_name)
    .bind(&new.last_name)
    .bind(&new.email)
    .bind(&new.password_hash)
    .bind(&new.picture_path)
    .bind(&new.location)
    .bind(&new.occupation)
    .bind(now.to_rfc3339())
    .bind(now.to_rfc3339())
    .execute(pool)
    .await?;

    Ok(User {
        id,
        first_name: new.first_name,
        last_name: new.last_name,
        email: new.email,
        password_hash: new.password_hash,
        picture_path: new.picture_path,
        location: new.location,
        occupation: new.occupation,
        viewed_profile: 0,
        impressions: 0,
        created_at: now,
        updated_at: now,
    })
}

/// Get a user by id, or `None` if the id does not resolve.
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, first_name, last_name, email, password_hash, picture_path,
                location, occupation, viewed_profile, impressions, created_at, updated_at
         FROM users
         WHERE id = ?",
    )
    .bind(id.to_string())
    .fetch_optional(pool)
    .await?;

    row.map(|row| row_to_user(&row)).transpose()
}

/// Get a user by email, or `None` if no user has that address.
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<Option<User>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, first_name, last_name, email, password_hash, picture_path,
                location, occupation, viewed_profile, impressions, created_at, updated_at
         FROM users
         WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    row.map(|row| row_to_user(&row)).transpose()
}

fn row_to_user(row: &SqliteRow) -> Result<User, sqlx::Error> {
    Ok(User {
        id: Uuid::parse_str(&row.try_get::<String, _>("id")?).unwrap_or_default(),
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        email: row.try_get("email")?,
        password_hash: row.try_get("password_hash")?,
        picture_path: row.try_get("picture_path")?,
        location: row.try_get("location")?,
        occupation: row.try_get("occupation")?,
        viewed_profile: row.try_get("viewed_profile")?,
        impressions: row.try_get("impressions")?,
        created_at: parse_timestamp(&row.try_get::<String, _>("created_at")?),
        updated_at: parse_timestamp(&row.try_get::<String, _>("updated_at")?),
    })
}

/// Parse a stored RFC 3339 timestamp.
pub(crate) fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_roundtrip() {
        let now = Utc::now();
        let parsed = parse_timestamp(&now.to_rfc3339());
        assert_eq!(parsed.timestamp_micros(), now.timestamp_micros());
    }

    #[test]
    fn test_parse_timestamp_garbage_falls_back_to_epoch() {
        assert_eq!(parse_timestamp("not a date"), DateTime::UNIX_EPOCH);
    }
}
