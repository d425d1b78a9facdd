//! API Route Tables
//!
//! # Routes
//!
//! ## Public
//! - `POST /auth/register` - Registration (multipart, optional picture)
//! - `POST /auth/login` - Login, returns `{token, user}`
//!
//! ## Protected (bearer token required)
//! - `GET /auth/me` - Current user
//! - `GET /users/{id}` - User lookup
//! - `GET /users/{id}/friends` - Resolved friend profiles
//! - `PATCH /users/{id}/{friend_id}` - Symmetric friend toggle
//! - `POST /posts` - Create post (multipart, optional picture)
//! - `GET /posts` - Feed, newest first
//! - `GET /posts/{user_id}` - One user's posts, newest first
//! - `PATCH /posts/{id}/like` - Like toggle

use axum::middleware;
use axum::routing::{get, patch, post};
use axum::Router;

use crate::backend::auth::handlers::{login, me, register};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::posts::handlers::{create_post, list_feed_posts, list_user_posts, toggle_like};
use crate::backend::server::state::AppState;
use crate::backend::users::handlers::{get_user, get_user_friends, toggle_friend};

/// Routes reachable without a session token.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Routes gated by the bearer-token middleware.
pub fn protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/auth/me", get(me))
        .route("/users/{id}", get(get_user))
        .route("/users/{id}/friends", get(get_user_friends))
        .route("/users/{id}/{friend_id}", patch(toggle_friend))
        .route("/posts", post(create_post).get(list_feed_posts))
        .route("/posts/{user_id}", get(list_user_posts))
        .route("/posts/{id}/like", patch(toggle_like))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
