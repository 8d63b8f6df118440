use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::helpers::{create_user, make_test_app, send};

#[tokio::test]
async fn owner_can_update_own_profile() {
    let (app, state) = make_test_app().await;
    let alice = create_user(&state, "alice01", false).await;

    let (status, json) = send(
        &app,
        Method::PUT,
        &format!("/api/user/update/{}", alice.id()),
        Some(&alice.token),
        Some(json!({ "username": "alice2026" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["username"], "alice2026");
}

#[tokio::test]
async fn update_validates_and_requires_a_field() {
    let (app, state) = make_test_app().await;
    let alice = create_user(&state, "alice01", false).await;
    let uri = format!("/api/user/update/{}", alice.id());

    let (status, json) = send(&app, Method::PUT, &uri, Some(&alice.token), Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Please provide at least one field to update");

    let (status, json) = send(
        &app,
        Method::PUT,
        &uri,
        Some(&alice.token),
        Some(json!({ "username": "Bad Name" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
}

#[tokio::test]
async fn non_owner_cannot_update_or_delete_someone_else() {
    let (app, state) = make_test_app().await;
    let alice = create_user(&state, "alice01", false).await;
    let bob = create_user(&state, "bobby01", false).await;

    let (status, json) = send(
        &app,
        Method::PUT,
        &format!("/api/user/update/{}", alice.id()),
        Some(&bob.token),
        Some(json!({ "username": "hijacked" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "You are not allowed to update this user");

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/user/delete/{}", alice.id()),
        Some(&bob.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_deletes_any_user_and_missing_user_is_404() {
    let (app, state) = make_test_app().await;
    let admin = create_user(&state, "admin01", true).await;
    let alice = create_user(&state, "alice01", false).await;
    let uri = format!("/api/user/delete/{}", alice.id());

    let (status, json) = send(&app, Method::DELETE, &uri, Some(&admin.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "User has been deleted");

    let (status, json) = send(&app, Method::DELETE, &uri, Some(&admin.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "User not found");

    let (status, _) = send(&app, Method::GET, &format!("/api/user/{}", alice.id()), None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_listing_is_admin_only() {
    let (app, state) = make_test_app().await;
    let admin = create_user(&state, "admin01", true).await;
    let alice = create_user(&state, "alice01", false).await;

    let (status, _) = send(&app, Method::GET, "/api/user/getusers", Some(&alice.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, json) = send(
        &app,
        Method::GET,
        "/api/user/getusers?limit=1&sort=asc",
        Some(&admin.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["users"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["totalUsers"], 2);
    assert_eq!(json["data"]["lastMonthUsers"], 2);
}

#[tokio::test]
async fn public_profile_lookup() {
    let (app, state) = make_test_app().await;
    let alice = create_user(&state, "alice01", false).await;

    let (status, json) = send(&app, Method::GET, &format!("/api/user/{}", alice.id()), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["username"], "alice01");
}
