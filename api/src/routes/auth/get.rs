use axum::{Json, extract::State, response::IntoResponse};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::{common::current_user, users::common::UserResponse};

/// GET /api/auth/me
///
/// Returns the profile behind the bearer token.
///
/// ### Responses
/// - `200 OK` with the user
/// - `401 Unauthorized` without a valid token
/// - `404 Not Found` when the account has since been deleted
pub async fn get_me(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let me = current_user(state.db(), &user).await?;

    Ok(Json(ApiResponse::success(
        UserResponse::from(me),
        "User data retrieved successfully",
    )))
}
