use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::routes::users::common::UserResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide all required fields"))]
    pub username: String,

    #[serde(default)]
    #[validate(
        length(min = 1, message = "Please provide all required fields"),
        email(message = "Invalid email format")
    )]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

impl SignupRequest {
    /// Blank strings count as missing.
    pub fn has_blank_field(&self) -> bool {
        [&self.username, &self.email, &self.password]
            .iter()
            .any(|v| v.trim().is_empty())
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct SigninRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide all required fields"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide all required fields"))]
    pub password: String,
}

/// A user together with a freshly issued token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
    pub expires_at: String,
}
