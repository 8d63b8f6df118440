//! # Chatbot Routes Module
//!
//! Routes for the `/api/chatbot` endpoint group: the knowledge entries and
//! custom prompts the site's assistant is fed with.
//!
//! ## Access
//! Creating and listing sit behind `require_admin`. Deletes only need a
//! verified token; the handlers then apply the owner-or-admin rule.

use axum::{
    Router,
    middleware::from_fn_with_state,
    routing::{delete, get, post},
};
use util::state::AppState;

use crate::auth::guards::{require_admin, require_authenticated};
use delete::{delete_data, delete_prompt};
use get::{get_data, get_prompts};
use post::{custom_prompt, import_data};

pub mod common;
pub mod delete;
pub mod get;
pub mod post;

/// Builds the `/chatbot` route group.
///
/// - `POST /chatbot/import-data` → `import_data` (admin)
/// - `GET /chatbot/data` → `get_data` (admin)
/// - `DELETE /chatbot/data/{id}` → `delete_data` (owner or admin)
/// - `POST /chatbot/custom-prompt` → `custom_prompt` (admin)
/// - `GET /chatbot/prompt` → `get_prompts` (admin)
/// - `DELETE /chatbot/prompt/{id}` → `delete_prompt` (owner or admin)
pub fn chatbot_routes(app_state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/import-data", post(import_data))
        .route("/data", get(get_data))
        .route("/custom-prompt", post(custom_prompt))
        .route("/prompt", get(get_prompts))
        .route_layer(from_fn_with_state(app_state.clone(), require_admin));

    let owner = Router::new()
        .route("/data/{id}", delete(delete_data))
        .route("/prompt/{id}", delete(delete_prompt))
        .route_layer(from_fn_with_state(app_state, require_authenticated));

    admin.merge(owner)
}
