use axum::http::{Method, StatusCode};
use db::models::{
    comment::Model as CommentModel,
    post::{Model as PostModel, NewPost},
};
use serde_json::json;
use util::state::AppState;

use crate::helpers::{create_user, make_test_app, send};

async fn seed_post(state: &AppState, author_id: &str) -> PostModel {
    PostModel::create(
        state.db(),
        author_id,
        NewPost {
            title: "Commented post".into(),
            content: "body".into(),
            ..Default::default()
        },
    )
    .await
    .unwrap()
}

#[tokio::test]
async fn create_and_list_comments_for_a_post() {
    let (app, state) = make_test_app().await;
    let admin = create_user(&state, "admin01", true).await;
    let alice = create_user(&state, "alice01", false).await;
    let post = seed_post(&state, admin.id()).await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/comment/create",
        Some(&alice.token),
        Some(json!({ "content": "First!", "postId": post.id })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["data"]["userId"], alice.id());
    assert_eq!(json["data"]["numberOfLikes"], 0);

    let (status, json) = send(
        &app,
        Method::GET,
        &format!("/api/comment/getpostcomment/{}", post.id),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn comment_on_missing_post_or_without_content_fails() {
    let (app, state) = make_test_app().await;
    let alice = create_user(&state, "alice01", false).await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/comment/create",
        Some(&alice.token),
        Some(json!({ "content": "hello", "postId": "no-such-post" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Post not found");

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/comment/create",
        Some(&alice.token),
        Some(json!({ "postId": "whatever" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Please provide all required fields");

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/comment/create",
        Some(&alice.token),
        Some(json!({ "content": "x".repeat(201), "postId": "whatever" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn like_toggles_the_callers_like() {
    let (app, state) = make_test_app().await;
    let admin = create_user(&state, "admin01", true).await;
    let alice = create_user(&state, "alice01", false).await;
    let bob = create_user(&state, "bobby01", false).await;
    let post = seed_post(&state, admin.id()).await;
    let comment = CommentModel::create(state.db(), alice.id(), &post.id, "like me").await.unwrap();
    let uri = format!("/api/comment/likecomment/{}", comment.id);

    let (status, json) = send(&app, Method::PUT, &uri, Some(&bob.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["numberOfLikes"], 1);
    assert_eq!(json["data"]["likes"], json!([bob.id()]));

    let (_, json) = send(&app, Method::PUT, &uri, Some(&alice.token), None).await;
    assert_eq!(json["data"]["numberOfLikes"], 2);

    let (_, json) = send(&app, Method::PUT, &uri, Some(&bob.token), None).await;
    assert_eq!(json["data"]["numberOfLikes"], 1);
    assert_eq!(json["data"]["likes"], json!([alice.id()]));

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/comment/likecomment/missing",
        Some(&bob.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_someone_elses_comment_is_forbidden() {
    let (app, state) = make_test_app().await;
    let admin = create_user(&state, "admin01", true).await;
    let u1 = create_user(&state, "userone1", false).await;
    let u2 = create_user(&state, "usertwo2", false).await;
    let post = seed_post(&state, admin.id()).await;
    let comment = CommentModel::create(state.db(), u2.id(), &post.id, "mine").await.unwrap();

    let (status, json) = send(
        &app,
        Method::DELETE,
        &format!("/api/comment/deletecomment/{}", comment.id),
        Some(&u1.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["success"], false);
    assert_eq!(json["statusCode"], 403);
    assert_eq!(json["message"], "You are not allowed to delete this comment");

    assert!(CommentModel::find_by_id(state.db(), &comment.id).await.unwrap().is_some());
}

#[tokio::test]
async fn owner_edits_and_admin_deletes() {
    let (app, state) = make_test_app().await;
    let admin = create_user(&state, "admin01", true).await;
    let alice = create_user(&state, "alice01", false).await;
    let post = seed_post(&state, admin.id()).await;
    let comment = CommentModel::create(state.db(), alice.id(), &post.id, "tpyo").await.unwrap();

    let (status, json) = send(
        &app,
        Method::PUT,
        &format!("/api/comment/editcomment/{}", comment.id),
        Some(&alice.token),
        Some(json!({ "content": "typo" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["content"], "typo");

    let (status, json) = send(
        &app,
        Method::DELETE,
        &format!("/api/comment/deletecomment/{}", comment.id),
        Some(&admin.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "Comment has been deleted");
}

#[tokio::test]
async fn comment_listing_is_admin_only() {
    let (app, state) = make_test_app().await;
    let admin = create_user(&state, "admin01", true).await;
    let alice = create_user(&state, "alice01", false).await;
    let post = seed_post(&state, admin.id()).await;
    CommentModel::create(state.db(), alice.id(), &post.id, "one").await.unwrap();
    CommentModel::create(state.db(), alice.id(), &post.id, "two").await.unwrap();

    let (status, json) = send(&app, Method::GET, "/api/comment/getcomments", Some(&alice.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "You are not allowed to get all comments");

    let (status, json) = send(&app, Method::GET, "/api/comment/getcomments", Some(&admin.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["comments"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["totalComments"], 2);
    assert_eq!(json["data"]["lastMonthComments"], 2);
}

#[tokio::test]
async fn deleted_account_cannot_comment_with_old_token() {
    let (app, state) = make_test_app().await;
    let admin = create_user(&state, "admin01", true).await;
    let alice = create_user(&state, "alice01", false).await;
    let post = seed_post(&state, admin.id()).await;

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/user/delete/{}", alice.id()),
        Some(&alice.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/comment/create",
        Some(&alice.token),
        Some(json!({ "content": "still here?", "postId": post.id })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "User not found");
    assert_eq!(CommentModel::count(state.db()).await.unwrap(), 0);
}
