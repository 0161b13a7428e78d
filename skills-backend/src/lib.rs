// src/lib.rs
pub mod api;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod repository;
pub mod service;
pub mod types;
pub mod utils;

use crate::api::handlers::{
    analytics_handler::analytics_router, auth_handler::auth_router,
    department_handler::department_router, employee_handler::employee_router,
    evaluation_handler::evaluation_router, skill_handler::skill_router,
};
use crate::api::AppState;
use crate::config::AppConfig;
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::auth::{cors_layer, jwt_auth_middleware, AuthMiddlewareConfig};
use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

/// ヘルスチェック（認証不要）
pub async fn root_handler() -> &'static str {
    "Server is running!"
}

/// `/api` 配下のルーター。登録・ログイン以外は JWT 必須。
///
/// 認証は `route_layer` で一致したルートにだけ掛けるため、未定義パスは 404 になる。
pub fn api_router(app_state: AppState) -> Router {
    let auth_config = AuthMiddlewareConfig::new(app_state.jwt_manager.clone());

    let protected = Router::new()
        .nest("/employees", employee_router(app_state.clone()))
        .nest("/departments", department_router(app_state.clone()))
        .nest("/skills", skill_router(app_state.clone()))
        .nest("/evaluations", evaluation_router(app_state.clone()))
        .nest("/analytics", analytics_router(app_state.clone()))
        .route_layer(axum_middleware::from_fn_with_state(
            auth_config,
            jwt_auth_middleware,
        ));

    Router::new()
        .nest("/auth", auth_router(app_state))
        .merge(protected)
}

/// アプリケーション全体のルーター
pub fn app_router(app_state: AppState, config: &AppConfig) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .nest("/api", api_router(app_state))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(axum_middleware::from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_allowed_origins))
}
