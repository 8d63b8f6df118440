//! # Comment Routes Module
//!
//! Routes for the `/api/comment` endpoint group. Only reading a post's
//! comments is public.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use util::state::AppState;

use crate::auth::guards::require_authenticated;
use delete::delete_comment;
use get::{get_comments, get_post_comments};
use post::create_comment;
use put::{edit_comment, like_comment};

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Builds the `/comment` route group.
///
/// - `POST /comment/create` → `create_comment` (authenticated)
/// - `GET /comment/getpostcomment/{post_id}` → `get_post_comments` (public)
/// - `PUT /comment/likecomment/{comment_id}` → `like_comment` (authenticated)
/// - `PUT /comment/editcomment/{comment_id}` → `edit_comment` (owner or admin)
/// - `DELETE /comment/deletecomment/{comment_id}` → `delete_comment` (owner or admin)
/// - `GET /comment/getcomments` → `get_comments` (admin)
pub fn comment_routes(app_state: AppState) -> Router<AppState> {
    let authenticated = Router::new()
        .route("/create", post(create_comment))
        .route("/likecomment/{comment_id}", put(like_comment))
        .route("/editcomment/{comment_id}", put(edit_comment))
        .route("/deletecomment/{comment_id}", delete(delete_comment))
        .route("/getcomments", get(get_comments))
        .route_layer(from_fn_with_state(app_state, require_authenticated));

    Router::new()
        .merge(authenticated)
        .route("/getpostcomment/{post_id}", get(get_post_comments))
}
