// src/service/evaluation_service.rs
use crate::api::dto::evaluation_dto::{
    CreatedEvaluationResponse, EvaluationListQuery, EvaluationRequest, EvaluationSearchQuery,
};
use crate::api::dto::{MessageResponse, PagedResult};
use crate::domain::skill_evaluation_model::ActiveModel as EvaluationActiveModel;
use crate::error::AppResult;
use crate::repository::employee_repository::EmployeeRepository;
use crate::repository::evaluation_repository::{EvaluationRepository, EvaluationRow};
use crate::repository::skill_repository::SkillRepository;
use crate::utils::error_helper::{not_found_error, validation_error};
use std::sync::Arc;
use tracing::{debug, info};

/// `0..=max_score` の範囲外なら 400
fn ensure_score_in_range(score: f64, max_score: f64) -> AppResult<()> {
    if score.is_finite() && (0.0..=max_score).contains(&score) {
        Ok(())
    } else {
        Err(validation_error(
            "score",
            &format!("Score must be between 0 and {}", max_score),
        ))
    }
}

pub struct EvaluationService {
    evaluation_repo: Arc<EvaluationRepository>,
    employee_repo: Arc<EmployeeRepository>,
    skill_repo: Arc<SkillRepository>,
}

impl EvaluationService {
    pub fn new(
        evaluation_repo: Arc<EvaluationRepository>,
        employee_repo: Arc<EmployeeRepository>,
        skill_repo: Arc<SkillRepository>,
    ) -> Self {
        Self {
            evaluation_repo,
            employee_repo,
            skill_repo,
        }
    }

    /// 並び替え・ページング付き一覧。件数は全評価数。
    pub async fn details(&self, query: EvaluationListQuery) -> AppResult<PagedResult<EvaluationRow>> {
        let (limit, offset) = query.page.window();
        let sort = query.sort();

        let rows = self.evaluation_repo.find_page(sort, limit, offset).await?;
        if rows.is_empty() {
            return Err(not_found_error("No results available", "evaluation details"));
        }

        let total = self.evaluation_repo.count_all().await?;
        debug!(limit, offset, total, "Evaluation page loaded");

        Ok(PagedResult::new(rows, total as i64))
    }

    /// 条件検索（ページングなし）
    pub async fn search(&self, query: EvaluationSearchQuery) -> AppResult<Vec<EvaluationRow>> {
        let filters = query.filters();
        let rows = self.evaluation_repo.search(&filters, query.sort()).await?;

        debug!(filter_count = filters.filters().len(), rows = rows.len(), "Evaluation search");

        if rows.is_empty() {
            return Err(not_found_error("No results found", "evaluation search"));
        }

        Ok(rows)
    }

    pub async fn years(&self) -> AppResult<Vec<i32>> {
        Ok(self.evaluation_repo.find_years().await?)
    }

    /// 評価を追加。最大スコアはスキルから複製し、スキルレベルを分類する。
    pub async fn create(
        &self,
        emp_id: i32,
        skill_id: i32,
        request: EvaluationRequest,
    ) -> AppResult<CreatedEvaluationResponse> {
        let input = request.into_input()?;

        let skill = self
            .skill_repo
            .find_by_id(skill_id)
            .await?
            .ok_or_else(|| not_found_error("Skill not found", "evaluation create"))?;

        if self.employee_repo.find_by_id(emp_id).await?.is_none() {
            return Err(not_found_error("Employee not found", "evaluation create"));
        }

        if !skill.accepts_score(input.score) {
            return Err(validation_error(
                "score",
                &format!("Score must be between 0 and {}", skill.max_score),
            ));
        }

        let evaluation = self
            .evaluation_repo
            .create(EvaluationActiveModel::from_input(
                emp_id,
                skill_id,
                skill.max_score,
                input,
            ))
            .await?;

        info!(
            eval_id = evaluation.eval_id,
            emp_id,
            skill_id,
            skill_level = ?evaluation.skill_level,
            "Evaluation created"
        );

        Ok(CreatedEvaluationResponse {
            message: "Successfully inserted the data".to_string(),
            eval_id: evaluation.eval_id,
        })
    }

    /// 評価IDで更新。範囲チェックとスキルレベルは行の最大スコアに基づく。
    pub async fn update(&self, eval_id: i32, request: EvaluationRequest) -> AppResult<MessageResponse> {
        let input = request.into_input()?;

        let existing = self
            .evaluation_repo
            .find_by_id(eval_id)
            .await?
            .ok_or_else(|| not_found_error("No matching evaluation found", "evaluation update"))?;

        ensure_score_in_range(input.score, existing.max_score)?;

        let evaluation = self.evaluation_repo.update(existing.updated(input)).await?;

        info!(eval_id, skill_level = ?evaluation.skill_level, "Evaluation updated");

        Ok(MessageResponse::new("Evaluation updated successfully"))
    }

    pub async fn delete(&self, eval_id: i32) -> AppResult<MessageResponse> {
        let deleted = self.evaluation_repo.delete_by_id(eval_id).await?;

        if deleted == 0 {
            return Err(not_found_error("No matching evaluation found", "evaluation delete"));
        }

        info!(eval_id, "Evaluation deleted");
        Ok(MessageResponse::new("Successfully deleted the skill evaluation"))
    }
}
