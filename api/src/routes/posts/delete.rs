use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::post::Model as PostModel;
use util::state::AppState;

use crate::auth::{AuthUser, guards::authorize_with};
use crate::error::ApiError;
use crate::response::ApiResponse;

/// DELETE /api/post/deletepost/{post_id}
///
/// Deletes a post and its comments. Allowed for its author or an admin.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "success": true, "data": null, "message": "The post has been deleted" }
/// ```
/// - `403 Forbidden`
/// - `404 Not Found`
pub async fn delete_post(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.db();
    let post = PostModel::find_by_id(db, &post_id)
        .await?
        .ok_or(ApiError::NotFound("Post not found"))?;

    authorize_with(&user, Some(&post.user_id), "You are not allowed to delete this post")?;

    PostModel::delete(db, &post.id).await?;
    Ok(Json(ApiResponse::success_without_data("The post has been deleted")))
}
