use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::{comment::Model as CommentModel, post::Model as PostModel};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{ValidatedJson, current_user};

use super::common::{CommentResponse, CreateCommentRequest};

/// POST /api/comment/create
///
/// Adds a comment to a post on behalf of the caller.
///
/// ### Request Body
/// ```json
/// { "content": "Nice write-up", "postId": "…" }
/// ```
///
/// ### Responses
/// - `201 Created` with the comment
/// - `400 Bad Request` when `content` or `postId` is missing, or content is
///   longer than 200 characters
/// - `404 Not Found` when the post or the caller's account does not exist
pub async fn create_comment(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateCommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.db();
    current_user(db, &user).await?;
    if PostModel::find_by_id(db, &req.post_id).await?.is_none() {
        return Err(ApiError::NotFound("Post not found"));
    }

    let comment = CommentModel::create(db, user.id(), &req.post_id, &req.content).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            CommentResponse::from(comment),
            "Comment created successfully",
        )),
    ))
}
