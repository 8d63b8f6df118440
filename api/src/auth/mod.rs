pub mod claims;
pub mod extractors;
pub mod guards;
pub mod middleware;

pub use claims::{AuthUser, Claims};
pub use extractors::OptionalAuthUser;

use crate::error::ApiError;
use chrono::{Duration, Utc};
use jsonwebtoken::{Header, encode};
use util::state::AppState;

/// Signs a token for `user_id` and returns it with its RFC3339 expiry.
///
/// The lifetime comes from `JWT_DURATION_MINUTES`.
pub fn issue_token(state: &AppState, user_id: &str, admin: bool) -> Result<(String, String), ApiError> {
    let expiry = Utc::now() + Duration::minutes(state.jwt_duration_minutes());

    let claims = Claims {
        sub: user_id.to_owned(),
        exp: expiry.timestamp() as usize,
        admin,
    };

    let token = encode(&Header::default(), &claims, state.encoding_key())
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("token encoding failed: {e}")))?;

    Ok((token, expiry.to_rfc3339()))
}
