use axum::http::{Method, StatusCode};
use db::models::{chatbot::Model as ChatbotModel, prompt::Model as PromptModel};
use serde_json::json;

use crate::helpers::{create_user, make_test_app, send};

#[tokio::test]
async fn empty_store_reports_no_chatbots() {
    let (app, state) = make_test_app().await;
    let admin = create_user(&state, "admin01", true).await;

    let (status, json) = send(&app, Method::GET, "/api/chatbot/data", Some(&admin.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["statusCode"], 404);
    assert_eq!(json["message"], "No chatbots found");

    let (status, json) = send(&app, Method::GET, "/api/chatbot/prompt", Some(&admin.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "No prompt found");
}

#[tokio::test]
async fn chatbot_routes_are_admin_only() {
    let (app, state) = make_test_app().await;
    let alice = create_user(&state, "alice01", false).await;

    let (status, json) = send(&app, Method::GET, "/api/chatbot/data", Some(&alice.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "Admin access required");

    let (status, _) = send(&app, Method::GET, "/api/chatbot/data", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn import_list_and_delete_data() {
    let (app, state) = make_test_app().await;
    let admin = create_user(&state, "admin01", true).await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/chatbot/import-data",
        Some(&admin.token),
        Some(json!({ "title": "FAQ", "file": "faq.txt" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = json["data"]["id"].as_str().unwrap().to_owned();

    let (status, json) = send(&app, Method::GET, "/api/chatbot/data", Some(&admin.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"][0]["title"], "FAQ");

    let uri = format!("/api/chatbot/data/{id}");
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&admin.token), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&admin.token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn custom_prompt_requires_title_and_prompt() {
    let (app, state) = make_test_app().await;
    let admin = create_user(&state, "admin01", true).await;

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/chatbot/custom-prompt",
        Some(&admin.token),
        Some(json!({ "title": "Tone" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Please provide all required fields");

    let (status, json) = send(
        &app,
        Method::POST,
        "/api/chatbot/custom-prompt",
        Some(&admin.token),
        Some(json!({ "title": "Tone", "prompt": "Be brief." })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = json["data"]["id"].as_str().unwrap().to_owned();

    let (status, json) = send(&app, Method::GET, "/api/chatbot/prompt", Some(&admin.token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/chatbot/prompt/{id}"),
        Some(&admin.token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn deletes_follow_owner_or_admin_rule() {
    let (app, state) = make_test_app().await;
    let owner = create_user(&state, "owner01", false).await;
    let mallory = create_user(&state, "mallory01", false).await;
    let entry = ChatbotModel::create(state.db(), owner.id(), "FAQ", "faq.txt").await.unwrap();
    let prompt = PromptModel::create(state.db(), owner.id(), "Tone", "Be brief.").await.unwrap();

    let data_uri = format!("/api/chatbot/data/{}", entry.id);
    let (status, json) = send(&app, Method::DELETE, &data_uri, Some(&mallory.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "You are not allowed to delete this data");

    let prompt_uri = format!("/api/chatbot/prompt/{}", prompt.id);
    let (status, json) = send(&app, Method::DELETE, &prompt_uri, Some(&mallory.token), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["message"], "You are not allowed to delete this prompt");

    let (status, _) = send(&app, Method::DELETE, &data_uri, None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::DELETE, &data_uri, Some(&owner.token), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &prompt_uri, Some(&owner.token), None).await;
    assert_eq!(status, StatusCode::OK);
}
