use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::comment::Model as CommentModel;
use util::state::AppState;

use crate::auth::{AuthUser, guards::authorize_with};
use crate::error::ApiError;
use crate::response::ApiResponse;

/// DELETE /api/comment/deletecomment/{comment_id}
///
/// Allowed for the comment's author or an admin.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "success": true, "data": null, "message": "Comment has been deleted" }
/// ```
/// - `403 Forbidden`
/// ```json
/// { "success": false, "statusCode": 403, "message": "You are not allowed to delete this comment" }
/// ```
/// - `404 Not Found`
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.db();
    let comment = CommentModel::find_by_id(db, &comment_id)
        .await?
        .ok_or(ApiError::NotFound("Comment not found"))?;

    authorize_with(&user, Some(&comment.user_id), "You are not allowed to delete this comment")?;

    CommentModel::delete(db, &comment.id).await?;
    Ok(Json(ApiResponse::success_without_data("Comment has been deleted")))
}
