use axum::http::{Method, StatusCode};

use crate::helpers::{make_test_app, send};

#[tokio::test]
async fn health_is_public() {
    let (app, _) = make_test_app().await;

    let (status, json) = send(&app, Method::GET, "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"], "OK");
}

#[tokio::test]
async fn unknown_route_uses_error_envelope() {
    let (app, _) = make_test_app().await;

    let (status, json) = send(&app, Method::GET, "/api/nope", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["statusCode"], 404);
    assert_eq!(json["message"], "Route not found");
}
