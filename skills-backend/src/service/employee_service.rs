// src/service/employee_service.rs
use crate::api::dto::employee_dto::{CreateEmployeeRequest, EmployeeSearchQuery};
use crate::api::dto::PagedResult;
use crate::domain::employee_model;
use crate::domain::employee_summary::{summarize, EmployeeSummary};
use crate::error::{AppError, AppResult};
use crate::repository::department_repository::DepartmentRepository;
use crate::repository::employee_repository::{
    EmployeeEvaluationRow, EmployeeRepository, RecentEvaluationRow, SkillScoreRow,
};
use crate::utils::error_helper::not_found_error;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

/// 従業員要約の表示桁数
const SUMMARY_PLACES: u32 = 2;

pub struct EmployeeService {
    employee_repo: Arc<EmployeeRepository>,
    department_repo: Arc<DepartmentRepository>,
}

impl EmployeeService {
    pub fn new(
        employee_repo: Arc<EmployeeRepository>,
        department_repo: Arc<DepartmentRepository>,
    ) -> Self {
        Self {
            employee_repo,
            department_repo,
        }
    }

    pub async fn list_all(&self) -> AppResult<Vec<employee_model::Model>> {
        Ok(self.employee_repo.find_all().await?)
    }

    /// 従業員名の部分一致で評価を検索。件数は一致した全行数。
    pub async fn search(
        &self,
        query: EmployeeSearchQuery,
    ) -> AppResult<PagedResult<EmployeeEvaluationRow>> {
        let (limit, offset) = query.page.window();
        let name = query.emp_name.trim();

        let rows = self.employee_repo.search_by_name(name, limit, offset).await?;
        let total = self.employee_repo.count_by_name(name).await?;

        debug!(emp_name = %name, limit, offset, total, "Employee search");

        Ok(PagedResult::new(rows, total))
    }

    pub async fn recent_evaluations(&self) -> AppResult<Vec<RecentEvaluationRow>> {
        Ok(self.employee_repo.find_recent_evaluations().await?)
    }

    /// 従業員ごとのスキル一覧と正規化スコアの平均・最高
    pub async fn summaries(&self) -> AppResult<Vec<EmployeeSummary>> {
        let samples = self.employee_repo.find_evaluation_samples().await?;
        let summaries = summarize(samples, SUMMARY_PLACES);

        if summaries.is_empty() {
            return Err(not_found_error("No results found", "employee summaries"));
        }

        Ok(summaries)
    }

    pub async fn scores_by_skill(
        &self,
        skill_id: Option<i32>,
        year: Option<i32>,
    ) -> AppResult<Vec<SkillScoreRow>> {
        let skill_id =
            skill_id.ok_or_else(|| AppError::BadRequest("skillId is required".to_string()))?;

        Ok(self.employee_repo.find_scores_by_skill(skill_id, year).await?)
    }

    /// 従業員を追加。入社日の省略時は当日。
    pub async fn create(&self, request: CreateEmployeeRequest) -> AppResult<employee_model::Model> {
        if self
            .department_repo
            .find_by_id(request.dept_id)
            .await?
            .is_none()
        {
            return Err(not_found_error("Department not found", "employee create"));
        }

        let date_joined = request
            .date_joined
            .unwrap_or_else(|| Utc::now().date_naive());

        let employee = self
            .employee_repo
            .create(request.emp_name.trim().to_string(), request.dept_id, date_joined)
            .await?;

        info!(
            emp_id = employee.emp_id,
            dept_id = employee.dept_id,
            "Employee created"
        );

        Ok(employee)
    }
}
