use db::models::{chatbot::Model as ChatbotModel, prompt::Model as PromptModel};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatbotResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub file: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<ChatbotModel> for ChatbotResponse {
    fn from(entry: ChatbotModel) -> Self {
        Self {
            id: entry.id,
            user_id: entry.user_id,
            title: entry.title,
            file: entry.file,
            created_at: entry.created_at.to_rfc3339(),
            updated_at: entry.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub prompt: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<PromptModel> for PromptResponse {
    fn from(prompt: PromptModel) -> Self {
        Self {
            id: prompt.id,
            user_id: prompt.user_id,
            title: prompt.title,
            prompt: prompt.prompt,
            created_at: prompt.created_at.to_rfc3339(),
            updated_at: prompt.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct ImportDataRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide all required fields"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide all required fields"))]
    pub file: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CustomPromptRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide all required fields"))]
    pub title: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide all required fields"))]
    pub prompt: String,
}
