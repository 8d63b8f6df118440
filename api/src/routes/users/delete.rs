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

/// DELETE /api/user/delete/{user_id}
///
/// Deletes an account together with its posts and comments. Allowed for the
/// account owner or an admin.
///
/// ### Responses
/// - `200 OK`
/// ```json
/// { "success": true, "data": null, "message": "User has been deleted" }
/// ```
/// - `403 Forbidden`
/// - `404 Not Found`
pub async fn delete_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    authorize_with(&user, Some(&user_id), "You are not allowed to delete this user")?;

    if !UserModel::delete(state.db(), &user_id).await? {
        return Err(ApiError::NotFound("User not found"));
    }

    tracing::info!(user_id = %user_id, deleted_by = %user.id(), "User deleted");
    Ok(Json(ApiResponse::success_without_data("User has been deleted")))
}
