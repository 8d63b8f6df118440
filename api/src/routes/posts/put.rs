use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::post::{Model as PostModel, PostChanges};
use util::state::AppState;

use crate::auth::{AuthUser, guards::authorize_with};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{ValidatedJson, conflict_or_internal};

use super::common::{PostResponse, UpdatePostRequest};

/// PUT /api/post/updatepost/{post_id}
///
/// Edits a post. Allowed for its author or an admin. Omitted or blank
/// fields are left unchanged; a new title also regenerates the slug.
///
/// ### Responses
/// - `200 OK` with the updated post
/// - `403 Forbidden`
/// - `404 Not Found`
/// - `409 Conflict` when the new title is taken
pub async fn update_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    user: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdatePostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.db();
    let post = PostModel::find_by_id(db, &post_id)
        .await?
        .ok_or(ApiError::NotFound("Post not found"))?;

    authorize_with(&user, Some(&post.user_id), "You are not allowed to update this post")?;

    let changes = PostChanges {
        title: req.title.map(|t| t.trim().to_owned()),
        content: req.content,
        category: req.category,
        image: req.image,
    };

    let updated = PostModel::update(db, &post.id, changes)
        .await
        .map_err(|e| conflict_or_internal(e, "A post with this title already exists"))?;

    Ok(Json(ApiResponse::success(
        PostResponse::from(updated),
        "Post updated successfully",
    )))
}
