use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::models::{chatbot::Model as ChatbotModel, prompt::Model as PromptModel};
use util::state::AppState;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::routes::common::{ValidatedJson, current_user};

use super::common::{ChatbotResponse, CustomPromptRequest, ImportDataRequest, PromptResponse};

/// POST /api/chatbot/import-data
///
/// Stores a chatbot knowledge entry. **Admin only.**
///
/// ### Request Body
/// ```json
/// { "title": "FAQ", "file": "https://…/faq.txt" }
/// ```
///
/// ### Responses
/// - `201 Created` with the stored entry
/// - `400 Bad Request` when `title` or `file` is missing
/// - `404 Not Found` when the caller's account has been deleted
pub async fn import_data(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(req): ValidatedJson<ImportDataRequest>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(state.db(), &user).await?;
    let entry = ChatbotModel::create(state.db(), user.id(), &req.title, &req.file).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(ChatbotResponse::from(entry), "Data imported successfully")),
    ))
}

/// POST /api/chatbot/custom-prompt
///
/// Stores a custom system prompt. **Admin only.**
///
/// ### Request Body
/// ```json
/// { "title": "Tone", "prompt": "Answer like a friendly librarian." }
/// ```
///
/// ### Responses
/// - `201 Created` with the stored prompt
/// - `400 Bad Request` when `title` or `prompt` is missing
/// - `404 Not Found` when the caller's account has been deleted
pub async fn custom_prompt(
    State(state): State<AppState>,
    user: AuthUser,
    ValidatedJson(req): ValidatedJson<CustomPromptRequest>,
) -> Result<impl IntoResponse, ApiError> {
    current_user(state.db(), &user).await?;
    let prompt = PromptModel::create(state.db(), user.id(), &req.title, &req.prompt).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(PromptResponse::from(prompt), "Prompt saved successfully")),
    ))
}
