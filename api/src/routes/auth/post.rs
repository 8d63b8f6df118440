use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::user::Model as UserModel;
use util::state::AppState;

use crate::auth::issue_token;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{ValidatedJson, conflict_or_internal};
use crate::routes::users::common::UserResponse;

use super::common::{AuthResponse, SigninRequest, SignupRequest};

/// POST /api/auth/signup
///
/// Registers a regular (non-admin) account and signs it in.
///
/// ### Request Body
/// ```json
/// { "username": "alice01", "email": "alice@example.com", "password": "secret1" }
/// ```
///
/// ### Responses
/// - `201 Created`
/// ```json
/// {
///   "success": true,
///   "data": {
///     "user": { "id": "…", "username": "alice01", "email": "alice@example.com", "isAdmin": false, … },
///     "token": "jwt_token_here",
///     "expiresAt": "2026-01-10T11:00:00+00:00"
///   },
///   "message": "Signup successful"
/// }
/// ```
/// - `400 Bad Request` (missing field, invalid email, short password)
/// - `409 Conflict`
/// ```json
/// { "success": false, "statusCode": 409, "message": "Username or email already taken" }
/// ```
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.has_blank_field() {
        return Err(ApiError::required_fields());
    }

    let user = UserModel::create(state.db(), req.username.trim(), req.email.trim(), &req.password, false)
        .await
        .map_err(|e| conflict_or_internal(e, "Username or email already taken"))?;

    let (token, expires_at) = issue_token(&state, &user.id, user.admin)?;
    tracing::info!(user_id = %user.id, "New account registered");

    let body = AuthResponse {
        user: UserResponse::from(user),
        token,
        expires_at,
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(body, "Signup successful")),
    ))
}

/// POST /api/auth/signin
///
/// Exchanges email and password for a token.
///
/// ### Request Body
/// ```json
/// { "email": "alice@example.com", "password": "secret1" }
/// ```
///
/// ### Responses
/// - `200 OK` (same shape as signup)
/// - `400 Bad Request` when a field is missing
/// - `401 Unauthorized`
/// ```json
/// { "success": false, "statusCode": 401, "message": "Invalid credentials" }
/// ```
pub async fn signin(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SigninRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(user) = UserModel::authenticate(state.db(), &req.email, &req.password).await? else {
        tracing::debug!(email = %req.email, "Failed sign-in attempt");
        return Err(ApiError::InvalidLogin);
    };

    let (token, expires_at) = issue_token(&state, &user.id, user.admin)?;

    let body = AuthResponse {
        user: UserResponse::from(user),
        token,
        expires_at,
    };

    Ok(Json(ApiResponse::success(body, "Signin successful")))
}
