//! # User Routes Module
//!
//! Routes for the `/api/user` endpoint group.
//!
//! ## Structure
//! - `get.rs`: listing (admin) and public profile lookup
//! - `put.rs`: profile update (owner or admin)
//! - `delete.rs`: account deletion (owner or admin)
//! - `common.rs`: request/response types
//!
//! ## Access
//! Everything except `GET /{user_id}` requires a verified token; ownership
//! and admin rules are checked inside the handlers.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, put},
};
use util::state::AppState;

use crate::auth::guards::require_authenticated;
use delete::delete_user;
use get::{get_user, get_users};
use put::update_user;

pub mod common;
pub mod delete;
pub mod get;
pub mod put;

/// Builds the `/user` route group.
///
/// - `GET /user/getusers` → `get_users` (admin)
/// - `GET /user/{user_id}` → `get_user` (public)
/// - `PUT /user/update/{user_id}` → `update_user` (owner or admin)
/// - `DELETE /user/delete/{user_id}` → `delete_user` (owner or admin)
pub fn user_routes(app_state: AppState) -> Router<AppState> {
    let authenticated = Router::new()
        .route("/getusers", get(get_users))
        .route("/update/{user_id}", put(update_user))
        .route("/delete/{user_id}", delete(delete_user))
        .route_layer(from_fn_with_state(app_state, require_authenticated));

    Router::new()
        .merge(authenticated)
        .route("/{user_id}", get(get_user))
}
