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
use crate::routes::common::ValidatedJson;

use super::common::{CommentResponse, EditCommentRequest};

/// PUT /api/comment/likecomment/{comment_id}
///
/// Likes the comment, or removes the caller's like if already present.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": { "id": "…", "likes": ["…"], "numberOfLikes": 1, … },
///   "message": "Comment like toggled"
/// }
/// ```
/// - `404 Not Found`
pub async fn like_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.db();
    let comment = CommentModel::find_by_id(db, &comment_id)
        .await?
        .ok_or(ApiError::NotFound("Comment not found"))?;

    let updated = comment.toggle_like(db, user.id()).await?;

    Ok(Json(ApiResponse::success(
        CommentResponse::from(updated),
        "Comment like toggled",
    )))
}

/// PUT /api/comment/editcomment/{comment_id}
///
/// Replaces the text of a comment. Allowed for its author or an admin.
///
/// ### Request Body
/// ```json
/// { "content": "Edited text" }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated comment
/// - `400 Bad Request`
/// - `403 Forbidden`
/// - `404 Not Found`
pub async fn edit_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
    user: AuthUser,
    ValidatedJson(req): ValidatedJson<EditCommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.db();
    let comment = CommentModel::find_by_id(db, &comment_id)
        .await?
        .ok_or(ApiError::NotFound("Comment not found"))?;

    authorize_with(&user, Some(&comment.user_id), "You are not allowed to edit this comment")?;

    let updated = CommentModel::edit(db, &comment.id, &req.content).await?;

    Ok(Json(ApiResponse::success(
        CommentResponse::from(updated),
        "Comment updated successfully",
    )))
}
