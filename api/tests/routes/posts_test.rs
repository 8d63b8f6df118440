use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

use crate::helpers::{TestUser, create_user, make_test_app, send};

async fn create_post(app: &axum::Router, admin: &TestUser, title: &str, category: &str) -> Value {
    let (status, json) = send(
        app,
        Method::POST,
        "/api/post/create",
        Some(&admin.token),
        Some(json!({ "title": title, "content": format!("About {title}"), "category": category })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    json["data"].clone()
}

#[tokio::test]
async fn admin_creates_post_with_slug() {
    let (app, state) = make_test_app().await;
    let admin = create_user(&state, "admin01", true).await;

    let post = create_post(&app, &admin, "Hello World!", "rust").await;
    assert_eq!(post["slug"], "hello-world");
    assert_eq!(post["userId"], admin.id());
    assert_eq!(post["category"], "rust");
}

#[tokio::test]
async fn non_admin_cannot_create_post() {
    let (app, state) = make_test_app().await;
    let alice = create_user(&state, "alice01", false).await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/post/create",
        Some(&alice.token),
        Some(json!({ "title": "Mine", "content": "text" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "You are not allowed to create a post");
}

#[tokio::test]
async fn duplicate_title_conflicts() {
    let (app, state) = make_test_app().await;
    let admin = create_user(&state, "admin01", true).await;
    create_post(&app, &admin, "Same", "a").await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/post/create",
        Some(&admin.token),
        Some(json!({ "title": "Same", "content": "again" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["statusCode"], 409);
}

#[tokio::test]
async fn listing_filters_and_counts() {
    let (app, state) = make_test_app().await;
    let admin = create_user(&state, "admin01", true).await;
    create_post(&app, &admin, "Rust ownership", "rust").await;
    create_post(&app, &admin, "Go channels", "go").await;
    create_post(&app, &admin, "Rust lifetimes", "rust").await;

    let (status, json) = send(&app, Method::GET, "/api/post/getposts?category=rust", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["posts"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["totalPosts"], 3);
    assert_eq!(json["data"]["lastMonthPosts"], 3);

    let (_, json) = send(&app, Method::GET, "/api/post/getposts?searchTerm=channels", None, None).await;
    let posts = json["data"]["posts"].as_array().unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["slug"], "go-channels");

    let (_, json) = send(&app, Method::GET, "/api/post/getposts?limit=1&startIndex=1", None, None).await;
    assert_eq!(json["data"]["posts"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn only_author_or_admin_may_change_a_post() {
    let (app, state) = make_test_app().await;
    let author = create_user(&state, "admin01", true).await;
    let alice = create_user(&state, "alice01", false).await;
    let post = create_post(&app, &author, "Original", "misc").await;
    let id = post["id"].as_str().unwrap();

    let (status, json) = send(
        &app,
        Method::PUT,
        &format!("/api/post/updatepost/{id}"),
        Some(&alice.token),
        Some(json!({ "title": "Stolen" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "You are not allowed to update this post");

    let (status, json) = send(
        &app,
        Method::PUT,
        &format!("/api/post/updatepost/{id}"),
        Some(&author.token),
        Some(json!({ "title": "Renamed Post" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["slug"], "renamed-post");

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/post/deletepost/{id}"),
        Some(&alice.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/post/deletepost/{id}"),
        Some(&author.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(
        &app,
        Method::DELETE,
        &format!("/api/post/deletepost/{id}"),
        Some(&author.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Post not found");
}

#[tokio::test]
async fn punctuation_only_titles_do_not_collide() {
    let (app, state) = make_test_app().await;
    let admin = create_user(&state, "admin01", true).await;

    let first = create_post(&app, &admin, "!!!", "misc").await;
    let second = create_post(&app, &admin, "???", "misc").await;
    assert_ne!(first["slug"], "");
    assert_ne!(first["slug"], second["slug"]);
}

#[tokio::test]
async fn deleted_admin_cannot_publish_with_old_token() {
    let (app, state) = make_test_app().await;
    let admin = create_user(&state, "admin01", true).await;

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/user/delete/{}", admin.id()),
        Some(&admin.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/post/create",
        Some(&admin.token),
        Some(json!({ "title": "Ghost post", "content": "boo" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "User not found");
}
