//! Request plumbing shared by every route group.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
};
use chrono::{DateTime, Months, Utc};
use db::models::{Page, SortOrder, user::Model as UserModel};
use sea_orm::{DatabaseConnection, DbErr, SqlErr};
use serde::{Deserialize, de::DeserializeOwned};
use validator::{Validate, ValidationErrors};

use crate::auth::AuthUser;
use crate::error::ApiError;

/// JSON body that has been deserialized *and* validated.
///
/// Malformed JSON, a wrong content type, or a missing field all reject with
/// `400 Please provide all required fields`. Validator failures reject with
/// the collected rule messages. Either way the handler body never runs.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "Rejected request body");
            ApiError::required_fields()
        })?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(format_validation_errors(&errors)))?;

        Ok(Self(value))
    }
}

/// Query string wrapper whose rejection uses the JSON error envelope.
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Joins every validator message, ordered by field name, with `"; "`.
/// Repeated messages (several empty required fields) appear once.
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut messages: Vec<String> = Vec::new();
    for (_, errs) in fields {
        for message in errs.iter().filter_map(|e| e.message.as_ref()) {
            if !messages.iter().any(|m| m == message) {
                messages.push(message.to_string());
            }
        }
    }

    messages.join("; ")
}

/// Pagination and ordering accepted by the admin listings.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub start_index: Option<u64>,
    pub limit: Option<u64>,
    pub sort: Option<String>,
}

impl ListQuery {
    pub fn page(&self) -> Page {
        Page::new(self.start_index, self.limit)
    }

    pub fn order(&self) -> SortOrder {
        SortOrder::parse(self.sort.as_deref())
    }
}

/// Start of the "last month" window used by the listing statistics.
pub fn one_month_ago() -> DateTime<Utc> {
    let now = Utc::now();
    now.checked_sub_months(Months::new(1)).unwrap_or(now)
}

/// Maps a unique-constraint violation to `409 <message>`; anything else is
/// an internal error.
pub fn conflict_or_internal(err: DbErr, message: &'static str) -> ApiError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(%detail, "Unique constraint violated");
            ApiError::Conflict(message)
        }
        _ => err.into(),
    }
}

/// Loads the account behind a verified token.
///
/// Tokens outlive account deletion, so anything that writes rows owned by the
/// caller checks this first: `404 User not found` when the account is gone.
pub async fn current_user(db: &DatabaseConnection, user: &AuthUser) -> Result<UserModel, ApiError> {
    UserModel::find_by_id(db, user.id())
        .await?
        .ok_or(ApiError::NotFound("User not found"))
}
