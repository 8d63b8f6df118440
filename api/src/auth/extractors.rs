//! Bearer-token verification and the extractors built on it.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderValue, header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use std::convert::Infallible;
use util::state::AppState;

use crate::auth::claims::{AuthUser, Claims};
use crate::error::ApiError;

/// Turns a raw `Authorization` header into a verified identity.
///
/// - Header absent, not ASCII, not `Bearer`, or an empty token →
///   [`ApiError::MissingCredential`].
/// - Bad signature, malformed payload or an `exp` in the past (no leeway) →
///   [`ApiError::InvalidCredential`].
pub fn verify_bearer(header: Option<&HeaderValue>, key: &DecodingKey) -> Result<AuthUser, ApiError> {
    let Some(token) = bearer_token(header) else {
        tracing::debug!("Request carried no bearer token");
        return Err(ApiError::MissingCredential);
    };

    decode_claims(token, key).map(AuthUser).map_err(|e| {
        tracing::warn!(error = %e, "Rejected bearer token");
        ApiError::InvalidCredential
    })
}

fn bearer_token(header: Option<&HeaderValue>) -> Option<&str> {
    let value = header?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}

fn decode_claims(token: &str, key: &DecodingKey) -> jsonwebtoken::errors::Result<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(token, key, &validation).map(|data| data.claims)
}

/// Resolves the caller of a request.
///
/// Reuses the identity a route guard already stored in the request
/// extensions, otherwise verifies the `Authorization` header.
///
/// ```ignore
/// async fn handler(user: AuthUser) -> impl IntoResponse {
///     format!("hello {}", user.id())
/// }
/// ```
impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(user.clone());
        }

        let app_state = AppState::from_ref(state);
        verify_bearer(parts.headers.get(AUTHORIZATION), app_state.decoding_key())
    }
}

/// Identity of the caller if a valid token is present. Never rejects and
/// never logs verification failures.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

impl<S> FromRequestParts<S> for OptionalAuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(Self(Some(user.clone())));
        }

        let app_state = AppState::from_ref(state);
        let user = bearer_token(parts.headers.get(AUTHORIZATION))
            .and_then(|token| decode_claims(token, app_state.decoding_key()).ok())
            .map(AuthUser);

        Ok(Self(user))
    }
}
