use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::post::{Model as PostModel, NewPost};
use util::state::AppState;

use crate::auth::{AuthUser, guards::authorize_with};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{ValidatedJson, conflict_or_internal, current_user};

use super::common::{CreatePostRequest, PostResponse};

/// POST /api/post/create
///
/// Publishes a post. **Admin only.** The slug is derived from the title.
///
/// ### Request Body
/// ```json
/// {
///   "title": "Hello World",
///   "content": "<p>First post</p>",
///   "category": "rust",
///   "image": "https://…/cover.png"
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": { "id": "…", "userId": "…", "title": "Hello World", "slug": "hello-world", "category": "rust", … },
///   "message": "Post created successfully"
/// }
/// ```
/// - `400 Bad Request` when `title` or `content` is missing
/// - `403 Forbidden` for non-admins
/// - `404 Not Found` when the caller's account has been deleted
/// - `409 Conflict` when the title is taken
pub async fn create_post(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(req): ValidatedJson<CreatePostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    authorize_with(&user, None, "You are not allowed to create a post")?;

    if req.title.trim().is_empty() || req.content.trim().is_empty() {
        return Err(ApiError::required_fields());
    }

    current_user(state.db(), &user).await?;

    let new_post = NewPost {
        title: req.title.trim().to_owned(),
        content: req.content,
        category: req.category,
        image: req.image,
    };

    let post = PostModel::create(state.db(), user.id(), new_post)
        .await
        .map_err(|e| conflict_or_internal(e, "A post with this title already exists"))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(PostResponse::from(post), "Post created successfully")),
    ))
}
