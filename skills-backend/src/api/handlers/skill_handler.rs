// src/api/handlers/skill_handler.rs

use crate::api::dto::skill_dto::{
    CreateCategoryRequest, CreateSkillRequest, EditSkillRequest, EmployeeSkillsQuery,
    RescaleResponse, SkillAverageResponse,
};
use crate::api::dto::MessageResponse;
use crate::api::AppState;
use crate::domain::skill_category_model;
use crate::error::AppResult;
use crate::extractors::{ValidatedId, ValidatedJson, ValidatedQuery};
use crate::middleware::auth::AuthenticatedUser;
use crate::repository::skill_repository::EmployeeSkillRow;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::info;

/// スキル一覧。0件なら 204。
pub async fn list_skills_handler(State(app_state): State<AppState>) -> AppResult<Response> {
    let skills = app_state.skill_service.overview().await?;

    if skills.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(Json(skills).into_response())
}

pub async fn add_skill_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<CreateSkillRequest>,
) -> AppResult<Json<MessageResponse>> {
    info!(user_id = %user.user_id(), skill_name = %payload.skill_name, "Adding skill");

    Ok(Json(app_state.skill_service.add(payload).await?))
}

pub async fn skill_average_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<SkillAverageResponse>>> {
    Ok(Json(app_state.skill_service.average().await?))
}

pub async fn remove_skill_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedId(skill_id): ValidatedId,
) -> AppResult<Json<MessageResponse>> {
    info!(user_id = %user.user_id(), skill_id, "Removing skill");

    Ok(Json(app_state.skill_service.remove(skill_id).await?))
}

/// 最大スコアの変更と既存評価の再計算
pub async fn edit_skill_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedId(skill_id): ValidatedId,
    ValidatedJson(payload): ValidatedJson<EditSkillRequest>,
) -> AppResult<Json<RescaleResponse>> {
    info!(user_id = %user.user_id(), skill_id, max_score = ?payload.max_score, "Rescaling skill");

    let response = app_state
        .skill_service
        .rescale(skill_id, payload.max_score)
        .await?;
    Ok(Json(response))
}

pub async fn employee_skills_handler(
    State(app_state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<EmployeeSkillsQuery>,
) -> AppResult<Json<Vec<EmployeeSkillRow>>> {
    Ok(Json(app_state.skill_service.employee_skills(query.emp_id).await?))
}

pub async fn list_categories_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<skill_category_model::Model>>> {
    Ok(Json(app_state.skill_service.categories().await?))
}

pub async fn create_category_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(payload): ValidatedJson<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<skill_category_model::Model>)> {
    info!(user_id = %user.user_id(), category_name = %payload.category_name, "Creating skill category");

    let category = app_state.skill_service.create_category(payload).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// スキルルーター（`/api/skills` 配下）
pub fn skill_router(app_state: AppState) -> Router {
    Router::new()
        .route("/all", get(list_skills_handler))
        .route("/add", post(add_skill_handler))
        .route("/average", get(skill_average_handler))
        .route("/remove/{skillId}", delete(remove_skill_handler))
        .route("/edit/{skillId}", put(edit_skill_handler))
        .route("/employee-skills", get(employee_skills_handler))
        .route("/categories", get(list_categories_handler))
        .route("/categories/add", post(create_category_handler))
        .with_state(app_state)
}
