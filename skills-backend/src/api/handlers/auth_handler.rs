// src/api/handlers/auth_handler.rs

use crate::api::dto::auth_dto::{LoginRequest, LoginResponse, RegisterRequest};
use crate::api::dto::MessageResponse;
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::ValidatedJson;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::info;

/// ユーザー登録
pub async fn register_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    info!(username = %payload.username, "Register attempt");

    let response = app_state.auth_service.register(payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// ログイン
pub async fn login_handler(
    State(app_state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    info!(username = %payload.username, "Login attempt");

    let response = app_state.auth_service.login(payload).await?;
    Ok(Json(response))
}

/// 認証ルーター（`/api/auth` 配下）
pub fn auth_router(app_state: AppState) -> Router {
    Router::new()
        .route("/register", post(register_handler))
        .route("/login", post(login_handler))
        .with_state(app_state)
}
