use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use db::models::{chatbot::Model as ChatbotModel, prompt::Model as PromptModel};
use util::state::AppState;

use crate::auth::{AuthUser, guards::authorize_with};
use crate::error::ApiError;
use crate::response::ApiResponse;

/// DELETE /api/chatbot/data/{id}
///
/// Removes a knowledge entry. Allowed for the admin who imported it or any
/// current admin.
///
/// ### Responses
/// - `200 OK`
/// - `403 Forbidden` (`You are not allowed to delete this data`)
/// - `404 Not Found` (`Chatbot data not found`)
pub async fn delete_data(
    State(state): State<AppState>,
    Path(id): Path<String>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.db();
    let entry = ChatbotModel::find_by_id(db, &id)
        .await?
        .ok_or(ApiError::NotFound("Chatbot data not found"))?;

    authorize_with(&user, Some(&entry.user_id), "You are not allowed to delete this data")?;

    ChatbotModel::delete(db, &entry.id).await?;
    Ok(Json(ApiResponse::success_without_data("Chatbot data has been deleted")))
}

/// DELETE /api/chatbot/prompt/{id}
///
/// ### Responses
/// - `200 OK`
/// - `403 Forbidden` (`You are not allowed to delete this prompt`)
/// - `404 Not Found` (`Prompt not found`)
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<String>,
    user: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let db = state.db();
    let prompt = PromptModel::find_by_id(db, &id)
        .await?
        .ok_or(ApiError::NotFound("Prompt not found"))?;

    authorize_with(&user, Some(&prompt.user_id), "You are not allowed to delete this prompt")?;

    PromptModel::delete(db, &prompt.id).await?;
    Ok(Json(ApiResponse::success_without_data("Prompt has been deleted")))
}
