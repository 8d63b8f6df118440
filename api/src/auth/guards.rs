//! Owner-or-admin authorization and the route-level guards built on the
//! bearer verifier.

use axum::{
    body::Body,
    extract::State,
    http::{Request, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use util::state::AppState;

use crate::auth::claims::AuthUser;
use crate::auth::extractors::verify_bearer;
use crate::error::ApiError;

pub const NOT_ALLOWED: &str = "You are not allowed to perform this action";
pub const ADMIN_REQUIRED: &str = "Admin access required";

/// Allows the call when the caller is an admin or owns the resource.
///
/// Pure; performs no I/O.
pub fn authorize(user: &AuthUser, owner_id: Option<&str>) -> Result<(), ApiError> {
    authorize_with(user, owner_id, NOT_ALLOWED)
}

/// Same rule as [`authorize`], rejecting with a caller-supplied message.
pub fn authorize_with(
    user: &AuthUser,
    owner_id: Option<&str>,
    message: &'static str,
) -> Result<(), ApiError> {
    if user.is_admin() || owner_id.is_some_and(|owner| owner == user.id()) {
        Ok(())
    } else {
        Err(ApiError::Forbidden(message))
    }
}

/// Admin-only operations have no owner.
pub fn require_admin_flag(user: &AuthUser) -> Result<(), ApiError> {
    authorize_with(user, None, ADMIN_REQUIRED)
}

/// Verifies the bearer token and stores the identity in the request
/// extensions for the handler's [`AuthUser`] extractor.
fn authenticate(state: &AppState, req: &mut Request<Body>) -> Result<AuthUser, ApiError> {
    let user = verify_bearer(req.headers().get(AUTHORIZATION), state.decoding_key())?;
    req.extensions_mut().insert(user.clone());
    Ok(user)
}

/// Rejects the request unless it carries a valid token.
pub async fn require_authenticated(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    authenticate(&state, &mut req)?;
    Ok(next.run(req).await)
}

/// Rejects the request unless it carries a valid admin token.
pub async fn require_admin(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let user = authenticate(&state, &mut req)?;
    require_admin_flag(&user)?;
    Ok(next.run(req).await)
}
