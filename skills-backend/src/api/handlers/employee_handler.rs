// src/api/handlers/employee_handler.rs

use crate::api::dto::employee_dto::{
    CreateEmployeeRequest, EmployeeSearchQuery, EmployeesBySkillQuery,
};
use crate::api::dto::PagedResult;
use crate::api::AppState;
use crate::domain::employee_model;
use crate::domain::employee_summary::EmployeeSummary;
use crate::error::AppResult;
use crate::extractors::{ValidatedJson, ValidatedQuery};
use crate::middleware::auth::AuthenticatedUser;
use crate::repository::employee_repository::{
    EmployeeEvaluationRow, RecentEvaluationRow, SkillScoreRow,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

pub async fn list_employees_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<employee_model::Model>>> {
    Ok(Json(app_state.employee_service.list_all().await?))
}

pub async fn search_employees_handler(
    State(app_state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<EmployeeSearchQuery>,
) -> AppResult<Json<PagedResult<EmployeeEvaluationRow>>> {
    Ok(Json(app_state.employee_service.search(query).await?))
}

pub async fn recent_evaluations_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<RecentEvaluationRow>>> {
    Ok(Json(app_state.employee_service.recent_evaluations().await?))
}

pub async fn employee_summaries_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<EmployeeSummary>>> {
    Ok(Json(app_state.employee_service.summaries().await?))
}

pub async fn employees_by_skill_handler(
    State(app_state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<EmployeesBySkillQuery>,
) -> AppResult<Json<Vec<SkillScoreRow>>> {
    let rows = app_state
        .employee_service
        .scores_by_skill(query.skill_id, query.year)
        .await?;
    Ok(Json(rows))
}

pub async fn create_employee_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<CreateEmployeeRequest>,
) -> AppResult<(StatusCode, Json<employee_model::Model>)> {
    info!(user_id = %user.user_id(), dept_id = payload.dept_id, "Creating employee");

    let employee = app_state.employee_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

/// 従業員ルーター（`/api/employees` 配下）
pub fn employee_router(app_state: AppState) -> Router {
    Router::new()
        .route("/all", get(list_employees_handler))
        .route("/search", get(search_employees_handler))
        .route("/recent", get(recent_evaluations_handler))
        .route("/main", get(employee_summaries_handler))
        .route("/by-skill", get(employees_by_skill_handler))
        .route("/add", post(create_employee_handler))
        .with_state(app_state)
}
