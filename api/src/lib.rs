pub mod auth;
pub mod error;
pub mod response;
pub mod routes;

use axum::{Router, middleware::from_fn_with_state};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use util::state::AppState;

use crate::auth::middleware::log_request;
use crate::error::ApiError;
use crate::routes::routes;

/// The complete application: `/api` routes, request logging, tracing, CORS
/// and a JSON 404 for everything else.
pub fn app(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", routes(app_state.clone()))
        .fallback(route_not_found)
        .layer(from_fn_with_state(app_state.clone(), log_request))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found")
}
