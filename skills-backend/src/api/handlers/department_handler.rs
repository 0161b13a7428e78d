// src/api/handlers/department_handler.rs

use crate::api::dto::department_dto::{CreateDepartmentRequest, DepartmentDetailResponse};
use crate::api::AppState;
use crate::domain::department_model;
use crate::error::AppResult;
use crate::extractors::ValidatedJson;
use crate::middleware::auth::AuthenticatedUser;
use crate::repository::department_repository::DepartmentNameRow;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

pub async fn list_departments_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<DepartmentNameRow>>> {
    Ok(Json(app_state.department_service.list_names().await?))
}

pub async fn department_details_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<DepartmentDetailResponse>>> {
    Ok(Json(app_state.department_service.details().await?))
}

pub async fn create_department_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<CreateDepartmentRequest>,
) -> AppResult<(StatusCode, Json<department_model::Model>)> {
    info!(user_id = %user.user_id(), dept_name = %payload.dept_name, "Creating department");

    let department = app_state.department_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(department)))
}

/// 部署ルーター（`/api/departments` 配下）
pub fn department_router(app_state: AppState) -> Router {
    Router::new()
        .route("/all", get(list_departments_handler))
        .route("/details", get(department_details_handler))
        .route("/add", post(create_department_handler))
        .with_state(app_state)
}
