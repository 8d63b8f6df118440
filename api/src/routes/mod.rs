//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → health check (public)
//! - `/auth` → signup, signin, current user
//! - `/user` → profiles and the admin user listing
//! - `/post` → posts
//! - `/comment` → comments and likes
//! - `/chatbot` → chatbot data and prompts (admin)
//!
//! Which calls need a token is decided here with route layers; who may touch
//! a particular resource is decided in the handlers with
//! [`crate::auth::guards::authorize`].

use axum::Router;
use util::state::AppState;

use crate::routes::{
    auth::auth_routes, chatbot::chatbot_routes, comments::comment_routes, health::health_routes,
    posts::post_routes, users::user_routes,
};

pub mod auth;
pub mod chatbot;
pub mod comments;
pub mod common;
pub mod health;
pub mod posts;
pub mod users;

/// Builds the static route table mounted under `/api`.
pub fn routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .nest("/auth", auth_routes(app_state.clone()))
        .nest("/user", user_routes(app_state.clone()))
        .nest("/post", post_routes(app_state.clone()))
        .nest("/comment", comment_routes(app_state.clone()))
        .nest("/chatbot", chatbot_routes(app_state))
}
