use axum::{Json, extract::State, response::IntoResponse};
use db::models::{chatbot::Model as ChatbotModel, prompt::Model as PromptModel};
use util::state::AppState;

use crate::error::ApiError;
use crate::response::ApiResponse;

use super::common::{ChatbotResponse, PromptResponse};

/// GET /api/chatbot/data
///
/// **Admin only.** Every stored chatbot entry.
///
/// ### Responses
/// - `200 OK` with a non-empty array
/// - `404 Not Found`
/// ```json
/// { "success": false, "statusCode": 404, "message": "No chatbots found" }
/// ```
pub async fn get_data(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let entries = ChatbotModel::all(state.db()).await?;
    if entries.is_empty() {
        return Err(ApiError::NotFound("No chatbots found"));
    }

    let body: Vec<ChatbotResponse> = entries.into_iter().map(ChatbotResponse::from).collect();
    Ok(Json(ApiResponse::success(body, "Chatbot data retrieved successfully")))
}

/// GET /api/chatbot/prompt
///
/// **Admin only.** Every stored prompt; `404 No prompt found` when there are none.
pub async fn get_prompts(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let prompts = PromptModel::all(state.db()).await?;
    if prompts.is_empty() {
        return Err(ApiError::NotFound("No prompt found"));
    }

    let body: Vec<PromptResponse> = prompts.into_iter().map(PromptResponse::from).collect();
    Ok(Json(ApiResponse::success(body, "Prompts retrieved successfully")))
}
