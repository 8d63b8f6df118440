//! # Post Routes Module
//!
//! Routes for the `/api/post` endpoint group. Listing is public; writes need
//! a verified token and are checked against the post's author inside the
//! handlers.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use util::state::AppState;

use crate::auth::guards::require_authenticated;
use delete::delete_post;
use get::get_posts;
use post::create_post;
use put::update_post;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/post` route group.
///
/// - `POST /post/create` → `create_post` (admin)
/// - `GET /post/getposts` → `get_posts` (public)
/// - `PUT /post/updatepost/{post_id}` → `update_post` (owner or admin)
/// - `DELETE /post/deletepost/{post_id}` → `delete_post` (owner or admin)
pub fn post_routes(app_state: AppState) -> Router<AppState> {
    let authenticated = Router::new()
        .route("/create", post(create_post))
        .route("/updatepost/{post_id}", put(update_post))
        .route("/deletepost/{post_id}", delete(delete_post))
        .route_layer(from_fn_with_state(app_state, require_authenticated));

    Router::new()
        .merge(authenticated)
        .route("/getposts", get(get_posts))
}
