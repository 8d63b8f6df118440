use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::user::{Model as UserModel, UserChanges};
use sea_orm::DbErr;
use util::state::AppState;

use crate::auth::{AuthUser, guards::authorize_with};
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{ValidatedJson, conflict_or_internal};

use super::common::{UpdateUserRequest, UserResponse};

/// PUT /api/user/update/{user_id}
///
/// Updates a profile. Allowed for the account owner or an admin.
///
/// ### Request Body (all optional, at least one required)
/// ```json
/// {
///   "username": "alice01",
///   "email": "alice@example.com",
///   "password": "secret1",
///   "profilePicture": "https://…/me.png"
/// }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated user
/// - `400 Bad Request` on validation failure or an empty body
/// - `403 Forbidden` when updating someone else's profile
/// - `404 Not Found`
/// - `409 Conflict` when the username or email is already taken
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    user: AuthUser,
    ValidatedJson(req): ValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    authorize_with(&user, Some(&user_id), "You are not allowed to update this user")?;

    if req.is_empty() {
        return Err(ApiError::BadRequest(
            "Please provide at least one field to update".into(),
        ));
    }

    let changes = UserChanges {
        username: req.username,
        email: req.email,
        password: req.password,
        profile_picture: req.profile_picture,
    };

    let updated = match UserModel::update(state.db(), &user_id, changes).await {
        Ok(updated) => updated,
        Err(DbErr::RecordNotUpdated) => return Err(ApiError::NotFound("User not found")),
        Err(e) => return Err(conflict_or_internal(e, "Username or email already taken")),
    };

    Ok(Json(ApiResponse::success(
        UserResponse::from(updated),
        "User updated successfully",
    )))
}
