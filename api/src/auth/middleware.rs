use axum::{
    body::Body,
    extract::ConnectInfo,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use headers::{HeaderMapExt, Origin, UserAgent};
use std::net::SocketAddr;
use tracing::info;

use crate::auth::extractors::OptionalAuthUser;

/// Logs method, path, client IP, caller id (if authenticated), origin and
/// user-agent for every request. CORS preflight `OPTIONS` requests are skipped.
///
/// ```ignore
/// let app = Router::new()
///     .layer(from_fn_with_state(state.clone(), log_request))
///     .with_state(state);
/// ```
///
/// The IP is only known when the server was started with
/// `into_make_service_with_connect_info::<SocketAddr>()`; otherwise it is
/// logged as `unknown`.
pub async fn log_request(
    OptionalAuthUser(user): OptionalAuthUser,
    req: Request<Body>,
    next: Next,
) -> Response {
    if req.method() == Method::OPTIONS {
        return next.run(req).await;
    }

    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".into());
    let origin = req
        .headers()
        .typed_get::<Origin>()
        .map(|o| o.to_string())
        .unwrap_or_else(|| "unknown".into());
    let user_agent = req
        .headers()
        .typed_get::<UserAgent>()
        .map(|ua| ua.to_string())
        .unwrap_or_else(|| "unknown".into());

    info!(
        method = ?req.method(),
        path = %req.uri().path(),
        ip = %ip,
        user = user.as_ref().map(|u| u.id()).unwrap_or("anonymous"),
        origin = %origin,
        user_agent = %user_agent,
        "Incoming request"
    );

    next.run(req).await
}
