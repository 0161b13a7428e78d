// src/api/handlers/evaluation_handler.rs

use crate::api::dto::evaluation_dto::{
    CreatedEvaluationResponse, EvaluationListQuery, EvaluationRequest, EvaluationSearchQuery,
    EvaluationTargetQuery,
};
use crate::api::dto::{MessageResponse, PagedResult};
use crate::api::AppState;
use crate::error::AppResult;
use crate::extractors::{ValidatedId, ValidatedJson, ValidatedQuery};
use crate::middleware::auth::AuthenticatedUser;
use crate::repository::evaluation_repository::EvaluationRow;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use tracing::info;

pub async fn evaluation_details_handler(
    State(app_state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<EvaluationListQuery>,
) -> AppResult<Json<PagedResult<EvaluationRow>>> {
    Ok(Json(app_state.evaluation_service.details(query).await?))
}

pub async fn search_evaluations_handler(
    State(app_state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<EvaluationSearchQuery>,
) -> AppResult<Json<Vec<EvaluationRow>>> {
    Ok(Json(app_state.evaluation_service.search(query).await?))
}

pub async fn evaluation_years_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<i32>>> {
    Ok(Json(app_state.evaluation_service.years().await?))
}

pub async fn add_evaluation_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedQuery(target): ValidatedQuery<EvaluationTargetQuery>,
    ValidatedJson(payload): ValidatedJson<EvaluationRequest>,
) -> AppResult<(StatusCode, Json<CreatedEvaluationResponse>)> {
    let (emp_id, skill_id) = target.require()?;
    info!(user_id = %user.user_id(), emp_id, skill_id, "Adding evaluation");

    let response = app_state
        .evaluation_service
        .create(emp_id, skill_id, payload)
        .await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn update_evaluation_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedId(eval_id): ValidatedId,
    ValidatedJson(payload): ValidatedJson<EvaluationRequest>,
) -> AppResult<Json<MessageResponse>> {
    info!(user_id = %user.user_id(), eval_id, "Updating evaluation");

    Ok(Json(
        app_state.evaluation_service.update(eval_id, payload).await?,
    ))
}

pub async fn remove_evaluation_handler(
    State(app_state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedId(eval_id): ValidatedId,
) -> AppResult<Json<MessageResponse>> {
    info!(user_id = %user.user_id(), eval_id, "Removing evaluation");

    Ok(Json(app_state.evaluation_service.delete(eval_id).await?))
}

/// 評価ルーター（`/api/evaluations` 配下）
pub fn evaluation_router(app_state: AppState) -> Router {
    Router::new()
        .route("/details", get(evaluation_details_handler))
        .route("/search", get(search_evaluations_handler))
        .route("/years", get(evaluation_years_handler))
        .route("/add", post(add_evaluation_handler))
        .route("/update/{evalId}", put(update_evaluation_handler))
        .route("/remove/{evalId}", delete(remove_evaluation_handler))
        .with_state(app_state)
}
