// tests/integration/auth/token_guard_tests.rs

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};

use crate::common::{
    app_helper, auth_helper,
    request::{get_request, send},
};

#[tokio::test]
async fn test_root_is_public() {
    let app = app_helper::setup_app().await;

    let (status, body) = send(
        &app.router,
        Request::builder().uri("/").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Server is running!");
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let app = app_helper::setup_app().await;

    let (status, body) = send(
        &app.router,
        Request::builder()
            .uri("/api/employees/all")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "No Token Provided");
}

#[tokio::test]
async fn test_non_bearer_header_is_unauthorized() {
    let app = app_helper::setup_app().await;

    let (status, body) = send(
        &app.router,
        Request::builder()
            .uri("/api/skills/average")
            .header(header::AUTHORIZATION, "Basic dXNlcjpwYXNz")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "No Token Provided");
}

#[tokio::test]
async fn test_forged_token_is_forbidden() {
    let app = app_helper::setup_app().await;

    let (status, body) = send(
        &app.router,
        get_request("/api/analytics/top-performers", &auth_helper::forged_token()),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Invalid or Expired Token");
}

#[tokio::test]
async fn test_valid_token_reaches_handler() {
    let (app, token) = app_helper::setup_app_with_token().await;

    let (status, body) = send(&app.router, get_request("/api/employees/all", &token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_response_carries_request_id() {
    let (app, token) = app_helper::setup_app_with_token().await;

    let response = tower::ServiceExt::oneshot(
        app.router.clone(),
        get_request("/api/departments/all", &token),
    )
    .await
    .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_unknown_api_path_is_not_found() {
    let app = app_helper::setup_app().await;

    let (status, _) = send(
        &app.router,
        Request::builder()
            .uri("/api/unknown")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_suffix_on_protected_path_is_not_public() {
    let app = app_helper::setup_app().await;

    // 末尾が /auth/login でも公開ルートとしては扱わない
    let (status, _) = send(
        &app.router,
        Request::builder()
            .method("POST")
            .uri("/api/skills/auth/login")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &app.router,
        Request::builder()
            .method("DELETE")
            .uri("/api/skills/remove/1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "No Token Provided");
}
