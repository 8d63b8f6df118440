use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::helpers::{create_user, make_test_app, send};

#[tokio::test]
async fn signup_then_signin_then_me() {
    let (app, _) = make_test_app().await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/auth/signup",
        None,
        Some(json!({ "username": "alice01", "email": "alice@example.com", "password": "secret1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["user"]["username"], "alice01");
    assert_eq!(json["data"]["user"]["isAdmin"], false);
    assert!(json["data"]["user"].get("passwordHash").is_none());
    assert!(json["data"]["user"].get("password_hash").is_none());
    assert!(json["data"]["token"].as_str().is_some());
    let user_id = json["data"]["user"]["id"].as_str().unwrap().to_owned();

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/auth/signin",
        None,
        Some(json!({ "email": "alice@example.com", "password": "secret1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = json["data"]["token"].as_str().unwrap().to_owned();
    assert!(json["data"]["expiresAt"].as_str().is_some());

    let (status, json) = send(&app, Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["id"], user_id);
    assert_eq!(json["data"]["email"], "alice@example.com");
}

#[tokio::test]
async fn signup_rejects_duplicates_and_missing_fields() {
    let (app, state) = make_test_app().await;
    create_user(&state, "alice01", false).await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/auth/signup",
        None,
        Some(json!({ "username": "alice01", "email": "other@example.com", "password": "secret1" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["statusCode"], 409);

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/auth/signup",
        None,
        Some(json!({ "email": "bob@example.com", "password": "secret1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Please provide all required fields");
}

#[tokio::test]
async fn signin_with_wrong_password_is_unauthorized() {
    let (app, state) = make_test_app().await;
    create_user(&state, "alice01", false).await;

    for body in [
        json!({ "email": "alice01@example.com", "password": "wrong-password" }),
        json!({ "email": "ghost@example.com", "password": "password123" }),
    ] {
        let (status, json) = send(&app, Method::POST, "/api/auth/signin", None, Some(body)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["message"], "Invalid credentials");
    }
}

#[tokio::test]
async fn me_requires_a_token() {
    let (app, _) = make_test_app().await;

    let (status, json) = send(&app, Method::GET, "/api/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "No token provided");

    let (status, json) = send(&app, Method::GET, "/api/auth/me", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid or expired token");
}
