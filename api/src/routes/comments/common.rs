use db::models::comment::Model as CommentModel;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

pub const MAX_COMMENT_CHARS: usize = 200;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentResponse {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
    pub content: String,
    pub likes: Vec<String>,
    pub number_of_likes: i32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CommentModel> for CommentResponse {
    fn from(comment: CommentModel) -> Self {
        Self {
            id: comment.id,
            user_id: comment.user_id,
            post_id: comment.post_id,
            content: comment.content,
            likes: comment.likes.0,
            number_of_likes: comment.number_of_likes,
            created_at: comment.created_at.to_rfc3339(),
            updated_at: comment.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentsListResponse {
    pub comments: Vec<CommentResponse>,
    pub total_comments: u64,
    pub last_month_comments: u64,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Please provide all required fields"),
        custom(function = within_comment_limit)
    )]
    pub content: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide all required fields"))]
    pub post_id: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditCommentRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, message = "Please provide all required fields"),
        custom(function = within_comment_limit)
    )]
    pub content: String,
}

fn within_comment_limit(content: &str) -> Result<(), ValidationError> {
    if content.chars().count() > MAX_COMMENT_CHARS {
        return Err(ValidationError::new("max_length")
            .with_message("Comment must be at most 200 characters".into()));
    }
    Ok(())
}
