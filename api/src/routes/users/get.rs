use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::user::Model as UserModel;
use util::state::AppState;

use crate::auth::{AuthUser, guards::authorize_with};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{ApiQuery, ListQuery, one_month_ago};

use super::common::{UserResponse, UsersListResponse};

/// GET /api/user/getusers
///
/// Lists users for the admin dashboard. **Admin only.**
///
/// ### Query Parameters
/// - `startIndex` (optional, default 0)
/// - `limit` (optional, default 9, max 50)
/// - `sort` (optional): `asc` or `desc` on creation time (default `desc`)
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "users": [{ "id": "…", "username": "alice01", "email": "alice@example.com", "profilePicture": "…", "isAdmin": false, "createdAt": "…", "updatedAt": "…" }],
///     "totalUsers": 12,
///     "lastMonthUsers": 3
///   },
///   "message": "Users retrieved successfully"
/// }
/// ```
/// - `403 Forbidden` for non-admins
pub async fn get_users(
    State(state): State<AppState>,
    user: AuthUser,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<impl IntoResponse, ApiError> {
    authorize_with(&user, None, "You are not allowed to see all users")?;

    let db = state.db();
    let users = UserModel::list(db, query.page(), query.order()).await?;
    let total_users = UserModel::count(db).await?;
    let last_month_users = UserModel::count_created_since(db, one_month_ago()).await?;

    let body = UsersListResponse {
        users: users.into_iter().map(UserResponse::from).collect(),
        total_users,
        last_month_users,
    };

    Ok(Json(ApiResponse::success(body, "Users retrieved successfully")))
}

/// GET /api/user/{user_id}
///
/// Public profile of a single user.
///
/// ### Responses
/// - `200 OK` with the user
/// - `404 Not Found`
/// ```json
/// { "success": false, "statusCode": 404, "message": "User not found" }
/// ```
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user = UserModel::find_by_id(state.db(), &user_id)
        .await?
        .ok_or(ApiError::NotFound("User not found"))?;

    Ok(Json(ApiResponse::success(
        UserResponse::from(user),
        "User retrieved successfully",
    )))
}
