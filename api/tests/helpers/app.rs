use api::auth::issue_token;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use db::{models::user::Model as UserModel, test_utils::setup_test_db};
use serde_json::Value;
use tower::ServiceExt;
use util::{config::AppConfig, state::AppState};

/// Fresh router over a migrated in-memory database.
pub async fn make_test_app() -> (Router, AppState) {
    let db = setup_test_db().await;
    let state = AppState::new(db, AppConfig::for_tests());
    (api::app(state.clone()), state)
}

pub struct TestUser {
    pub model: UserModel,
    pub token: String,
}

impl TestUser {
    pub fn id(&self) -> &str {
        &self.model.id
    }
}

/// Inserts a user with password `password123` and signs a token for it.
pub async fn create_user(state: &AppState, username: &str, admin: bool) -> TestUser {
    let email = format!("{username}@example.com");
    let model = UserModel::create(state.db(), username, &email, "password123", admin)
        .await
        .unwrap();
    let (token, _) = issue_token(state, &model.id, model.admin).unwrap();
    TestUser { model, token }
}

/// Sends one request and returns the status with the parsed JSON body
/// (`Value::Null` for an empty body).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
