//! Error taxonomy for the HTTP layer and the single place where failures are
//! turned into responses.
//!
//! Handlers, extractors and guards return `Result<_, ApiError>` and never
//! build error bodies themselves.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use thiserror::Error;

use crate::response::ErrorResponse;

/// Message used whenever a required request field is absent or empty.
pub const REQUIRED_FIELDS: &str = "Please provide all required fields";

#[derive(Debug, Error)]
pub enum ApiError {
    /// No `Authorization: Bearer <token>` header.
    #[error("No token provided")]
    MissingCredential,

    /// Bad signature, malformed payload, or expired token.
    #[error("Invalid or expired token")]
    InvalidCredential,

    /// Sign-in with an unknown email or a wrong password.
    #[error("Invalid credentials")]
    InvalidLogin,

    /// Authenticated, but neither the owner nor an admin.
    #[error("{0}")]
    Forbidden(&'static str),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(&'static str),

    /// Anything unexpected. Details are logged, never returned.
    #[error("internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingCredential | ApiError::InvalidCredential | ApiError::InvalidLogin => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The text placed in the response body.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Internal(_) => "Internal Server Error".to_owned(),
            other => other.to_string(),
        }
    }

    pub fn required_fields() -> Self {
        ApiError::BadRequest(REQUIRED_FIELDS.to_owned())
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        ApiError::Internal(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::Internal(err) = &self {
            tracing::error!(error = ?err, "Request failed with an internal error");
        }

        let body = ErrorResponse::new(status.as_u16(), self.public_message());
        (status, Json(body)).into_response()
    }
}
