// src/service/skill_service.rs
use crate::api::dto::skill_dto::{
    CreateCategoryRequest, CreateSkillRequest, RescaleResponse, SkillAverageResponse,
};
use crate::api::dto::MessageResponse;
use crate::db::DbPool;
use crate::domain::skill_category_model;
use crate::domain::skill_level::DEFAULT_MAX_SCORE;
use crate::error::{AppError, AppResult};
use crate::repository::skill_repository::{EmployeeSkillRow, SkillOverviewRow, SkillRepository};
use crate::utils::error_helper::{map_unique_violation, not_found_error, validation_error};
use crate::utils::transaction::TransactionManager;
use sea_orm::ConnectionTrait;
use std::sync::Arc;
use tracing::{info, warn};

const INVALID_MAX_SCORE_MESSAGE: &str = "max_score must be a positive number";

/// 最大スコアは正の有限値
pub fn validate_max_score(max_score: Option<f64>) -> AppResult<f64> {
    match max_score {
        Some(value) if value.is_finite() && value > 0.0 => Ok(value),
        _ => Err(validation_error("max_score", INVALID_MAX_SCORE_MESSAGE)),
    }
}

pub struct SkillService {
    db: DbPool,
    skill_repo: Arc<SkillRepository>,
}

impl SkillService {
    pub fn new(db: DbPool, skill_repo: Arc<SkillRepository>) -> Self {
        Self { db, skill_repo }
    }

    /// カテゴリ・評価人数付きのスキル一覧（空なら空のまま返す）
    pub async fn overview(&self) -> AppResult<Vec<SkillOverviewRow>> {
        Ok(self.skill_repo.find_overview().await?)
    }

    /// スキルを追加する。同名が既にあれば何もしない。
    pub async fn add(&self, request: CreateSkillRequest) -> AppResult<MessageResponse> {
        let max_score = match request.max_score {
            None => DEFAULT_MAX_SCORE,
            given => validate_max_score(given)?,
        };

        if let Some(category_id) = request.category_id {
            if self
                .skill_repo
                .find_category_by_id(category_id)
                .await?
                .is_none()
            {
                return Err(not_found_error("Skill category not found", "skill add"));
            }
        }

        let skill_name = request.skill_name.trim().to_string();
        let inserted = self
            .skill_repo
            .insert_if_absent(skill_name.clone(), request.category_id, max_score)
            .await?;

        if inserted == 0 {
            info!(skill_name = %skill_name, "Skill already exists, insert skipped");
        } else {
            info!(skill_name = %skill_name, max_score, "Skill added");
        }

        Ok(MessageResponse::new("Skill added successfully"))
    }

    pub async fn remove(&self, skill_id: i32) -> AppResult<MessageResponse> {
        let deleted = self.skill_repo.delete_by_id(skill_id).await?;

        if deleted == 0 {
            return Err(not_found_error("Skill not found", "skill remove"));
        }

        info!(skill_id, "Skill deleted");
        Ok(MessageResponse::new("Skill deleted successfully"))
    }

    /// スキルの最大スコアを変更し、既存評価を同じ比率のまま再計算する
    ///
    /// 評価が1件もない場合は NotFound でロールバックする。
    pub async fn rescale(&self, skill_id: i32, max_score: Option<f64>) -> AppResult<RescaleResponse> {
        let new_max_score = validate_max_score(max_score)?;

        let updated = self
            .db
            .execute_in_transaction(move |txn| {
                Box::pin(async move { Self::rescale_in(txn, skill_id, new_max_score).await })
            })
            .await?;

        info!(skill_id, new_max_score, updated, "Skill rescaled");

        Ok(RescaleResponse {
            message: "Skill level updated successfully".to_string(),
            updated,
        })
    }

    /// 与えられた接続（通常はトランザクション）上で評価とスキルの最大スコアを書き換える
    ///
    /// 戻り値は再計算した評価の件数。評価が1件もなければ NotFound。
    pub async fn rescale_in<C: ConnectionTrait>(
        conn: &C,
        skill_id: i32,
        new_max_score: f64,
    ) -> AppResult<u64> {
        let evaluations = SkillRepository::evaluations_for_skill(conn, skill_id).await?;

        if evaluations.is_empty() {
            return Err(not_found_error(
                "No evaluations found for the specified skillId",
                "skill rescale",
            ));
        }

        for evaluation in &evaluations {
            SkillRepository::rescale_evaluation(conn, evaluation, new_max_score).await?;
        }

        let skills = SkillRepository::update_max_score(conn, skill_id, new_max_score).await?;
        if skills == 0 {
            warn!(skill_id, "Evaluations exist for a skill row that is missing");
        }

        Ok(evaluations.len() as u64)
    }

    /// 集計行を1件だけ含む配列で返す（評価がなければ値は null）
    pub async fn average(&self) -> AppResult<Vec<SkillAverageResponse>> {
        let aggregate = self.skill_repo.normalized_score_aggregate().await?;
        Ok(vec![SkillAverageResponse::from(aggregate)])
    }

    pub async fn employee_skills(&self, emp_id: Option<i32>) -> AppResult<Vec<EmployeeSkillRow>> {
        let emp_id =
            emp_id.ok_or_else(|| AppError::BadRequest("empId is required".to_string()))?;

        let skills = self.skill_repo.find_by_employee(emp_id).await?;
        if skills.is_empty() {
            return Err(not_found_error("No results available", "employee skills"));
        }

        Ok(skills)
    }

    // --- カテゴリ ---

    pub async fn categories(&self) -> AppResult<Vec<skill_category_model::Model>> {
        Ok(self.skill_repo.find_all_categories().await?)
    }

    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> AppResult<skill_category_model::Model> {
        let category = self
            .skill_repo
            .create_category(request.category_name.trim().to_string())
            .await
            .map_err(|e| map_unique_violation(e, "Category already exists", "category create"))?;

        info!(category_id = category.category_id, "Skill category created");
        Ok(category)
    }
}
