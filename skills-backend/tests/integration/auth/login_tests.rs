// tests/integration/auth/login_tests.rs

use axum::http::StatusCode;
use serde_json::json;
use skills_backend::utils::jwt::JwtManager;

use crate::common::{
    app_helper,
    auth_helper::{self, TEST_PASSWORD},
    request::{public_request, send},
};

#[tokio::test]
async fn test_login_returns_token_and_user() {
    let app = app_helper::setup_app().await;
    let username = auth_helper::unique_username();
    auth_helper::register_user(&app.router, &username, TEST_PASSWORD).await;

    let (status, body) = auth_helper::login(&app.router, &username, TEST_PASSWORD).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["username"], username.as_str());
    assert!(body["user"]["id"].is_i64());

    // 発行されたトークンはサーバーの設定で検証できる
    let manager = JwtManager::new(app.config.jwt.clone()).unwrap();
    let claims = manager
        .verify_access_token(body["token"].as_str().unwrap())
        .unwrap();
    assert_eq!(claims.user.username, username);
    assert_eq!(claims.sub, body["user"]["id"].to_string());
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let app = app_helper::setup_app().await;
    let username = auth_helper::unique_username();
    auth_helper::register_user(&app.router, &username, TEST_PASSWORD).await;

    let (status, body) = auth_helper::login(&app.router, &username, "not-the-password").await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid Credentials");
}

#[tokio::test]
async fn test_login_unknown_user_is_unauthorized() {
    let app = app_helper::setup_app().await;

    let (status, body) = auth_helper::login(&app.router, "nobody", TEST_PASSWORD).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid Credentials");
}

#[tokio::test]
async fn test_login_missing_password_is_bad_request() {
    let app = app_helper::setup_app().await;

    let (status, _) = send(
        &app.router,
        public_request("POST", "/api/auth/login", &json!({ "username": "alice" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
