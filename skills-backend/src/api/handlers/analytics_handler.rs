// src/api/handlers/analytics_handler.rs

use crate::api::dto::analytics_dto::{
    ChartEntry, DepartmentAverageResponse, GrowthQuery, QuarterAverageResponse, QuarterWiseQuery,
};
use crate::api::AppState;
use crate::domain::growth_series::GrowthPoint;
use crate::error::AppResult;
use crate::extractors::{ValidatedId, ValidatedQuery};
use crate::repository::analytics_repository::TopPerformerRow;
use axum::{extract::State, routing::get, Json, Router};

pub async fn quarter_wise_handler(
    State(app_state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<QuarterWiseQuery>,
) -> AppResult<Json<Vec<QuarterAverageResponse>>> {
    Ok(Json(app_state.analytics_service.quarter_wise(query.year).await?))
}

pub async fn department_wise_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<DepartmentAverageResponse>>> {
    Ok(Json(app_state.analytics_service.department_wise().await?))
}

pub async fn skill_level_wise_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<ChartEntry>>> {
    Ok(Json(
        app_state.analytics_service.skill_level_distribution().await?,
    ))
}

pub async fn top_performers_handler(
    State(app_state): State<AppState>,
) -> AppResult<Json<Vec<TopPerformerRow>>> {
    Ok(Json(app_state.analytics_service.top_performers().await?))
}

pub async fn employee_growth_handler(
    State(app_state): State<AppState>,
    ValidatedId(emp_id): ValidatedId,
    ValidatedQuery(query): ValidatedQuery<GrowthQuery>,
) -> AppResult<Json<Vec<GrowthPoint>>> {
    Ok(Json(
        app_state
            .analytics_service
            .employee_growth(emp_id, query)
            .await?,
    ))
}

/// 分析ルーター（`/api/analytics` 配下）
pub fn analytics_router(app_state: AppState) -> Router {
    Router::new()
        .route("/quarter-wise", get(quarter_wise_handler))
        .route("/department-wise", get(department_wise_handler))
        .route("/skilllevel-wise", get(skill_level_wise_handler))
        .route("/top-performers", get(top_performers_handler))
        .route("/employee-growth/{empId}", get(employee_growth_handler))
        .with_state(app_state)
}
