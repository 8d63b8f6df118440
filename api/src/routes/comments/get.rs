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
use crate::routes::common::{ApiQuery, ListQuery, one_month_ago};

use super::common::{CommentResponse, CommentsListResponse};

/// GET /api/comment/getpostcomment/{post_id}
///
/// Public. Comments of a post, newest first. An unknown post yields an
/// empty list.
pub async fn get_post_comments(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let comments = CommentModel::for_post(state.db(), &post_id).await?;
    let body: Vec<CommentResponse> = comments.into_iter().map(CommentResponse::from).collect();

    Ok(Json(ApiResponse::success(body, "Comments retrieved successfully")))
}

/// GET /api/comment/getcomments
///
/// Moderation listing. **Admin only.** Accepts `startIndex`, `limit` and
/// `sort` like the user listing.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": { "comments": [ … ], "totalComments": 42, "lastMonthComments": 7 },
///   "message": "Comments retrieved successfully"
/// }
/// ```
/// - `403 Forbidden` for non-admins
pub async fn get_comments(
    State(state): State<AppState>,
    user: AuthUser,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    authorize_with(&user, None, "You are not allowed to get all comments")?;

    let db = state.db();
    let comments = CommentModel::list(db, query.page(), query.order()).await?;
    let total_comments = CommentModel::count(db).await?;
    let last_month_comments = CommentModel::count_created_since(db, one_month_ago()).await?;

    let body = CommentsListResponse {
        comments: comments.into_iter().map(CommentResponse::from).collect(),
        total_comments,
        last_month_comments,
    };

    Ok(Json(ApiResponse::success(body, "Comments retrieved successfully")))
}
