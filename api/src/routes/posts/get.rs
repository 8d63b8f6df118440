use axum::{Json, extract::State, response::IntoResponse};
use db::models::post::Model as PostModel;
use util::state::AppState;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{ApiQuery, one_month_ago};

use super::common::{GetPostsQuery, PostResponse, PostsListResponse};

/// GET /api/post/getposts
///
/// Public post listing.
///
/// ### Query Parameters
/// - `userId`, `category`, `slug`, `postId` (exact match, optional)
/// - `searchTerm` (optional): substring of title or content
/// - `startIndex` (default 0), `limit` (default 9, max 50)
/// - `order`: `asc` or `desc` on last update (default `desc`)
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": { "posts": [ … ], "totalPosts": 20, "lastMonthPosts": 4 },
///   "message": "Posts retrieved successfully"
/// }
/// ```
///
/// `totalPosts` and `lastMonthPosts` count every post, not only the
/// filtered ones.
pub async fn get_posts(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<GetPostsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.db();
    let posts = PostModel::filter(db, &query.filter(), query.page(), query.order()).await?;
    let total_posts = PostModel::count(db).await?;
    let last_month_posts = PostModel::count_created_since(db, one_month_ago()).await?;

    let body = PostsListResponse {
        posts: posts.into_iter().map(PostResponse::from).collect(),
        total_posts,
        last_month_posts,
    };

    Ok(Json(ApiResponse::success(body, "Posts retrieved successfully")))
}
