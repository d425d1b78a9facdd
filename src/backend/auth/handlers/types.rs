//! Authentication Request/Response Types
//!
//! Wire types for the auth endpoints plus the public user views reused by
//! the user and friend handlers. Field names are camelCase on the wire.
//! Neither view carries the password hash, so password material can never
//! leak through serialization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::User;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response: the session token plus the public view of the user.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserView,
}

/// Public view of a user record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub picture_path: Option<String>,
    pub location: Option<String>,
    pub occupation: Option<String>,
    pub viewed_profile: i64,
    pub impressions: i64,
    /// Friend identifiers in insertion order.
    pub friends: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl UserView {
    pub fn from_user(user: User, friends: Vec<Uuid>) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            picture_path: user.picture_path,
            location: user.location,
            occupation: user.occupation,
            viewed_profile: user.viewed_profile,
            impressions: user.impressions,
            friends,
            created_at: user.created_at,
        }
    }
}

/// Compact view used in friends listings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendView {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub occupation: Option<String>,
    pub location: Option<String>,
    pub picture_path: Option<String>,
}

impl From<User> for FriendView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            occupation: user.occupation,
            location: user.location,
            picture_path: user.picture_path,
        }
    }
}
