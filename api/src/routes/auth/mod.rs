//! # Auth Routes Module
//!
//! Routes for the `/api/auth` endpoint group.
//!
//! ## Structure
//! - `post.rs`: signup and signin
//! - `get.rs`: current user
//! - `common.rs`: request/response types

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{get, post},
};
use util::state::AppState;

use crate::auth::guards::require_authenticated;
use get::get_me;
use post::{signin, signup};

pub mod common;
pub mod get;
pub mod post;

/// Builds the `/auth` route group.
///
/// - `POST /auth/signup` → `signup`
/// - `POST /auth/signin` → `signin`
/// - `GET /auth/me` → `get_me` (authenticated)
pub fn auth_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route(
            "/me",
            get(get_me).route_layer(from_fn_with_state(app_state, require_authenticated)),
        )
}
