// src/service/analytics_service.rs
use crate::api::dto::analytics_dto::{
    ChartEntry, DepartmentAverageResponse, GrowthQuery, QuarterAverageResponse,
};
use crate::domain::growth_series::{build_series, default_skill_id, GrowthPoint, GrowthWindow};
use crate::domain::skill_level::SkillLevelDistribution;
use crate::error::{AppError, AppResult};
use crate::repository::analytics_repository::{AnalyticsRepository, TopPerformerRow};
use crate::repository::employee_repository::EmployeeRepository;
use crate::utils::error_helper::not_found_error;
use std::sync::Arc;
use tracing::debug;

pub struct AnalyticsService {
    analytics_repo: Arc<AnalyticsRepository>,
    employee_repo: Arc<EmployeeRepository>,
}

impl AnalyticsService {
    pub fn new(
        analytics_repo: Arc<AnalyticsRepository>,
        employee_repo: Arc<EmployeeRepository>,
    ) -> Self {
        Self {
            analytics_repo,
            employee_repo,
        }
    }

    /// 指定年の四半期別平均
    pub async fn quarter_wise(&self, year: Option<i32>) -> AppResult<Vec<QuarterAverageResponse>> {
        let year = year.ok_or_else(|| AppError::BadRequest("year is required".to_string()))?;

        let rows = self.analytics_repo.quarter_averages(year).await?;
        Ok(rows.into_iter().map(QuarterAverageResponse::from).collect())
    }

    pub async fn department_wise(&self) -> AppResult<Vec<DepartmentAverageResponse>> {
        let rows = self.analytics_repo.department_averages().await?;
        Ok(rows
            .into_iter()
            .map(DepartmentAverageResponse::from)
            .collect())
    }

    /// スキルレベル別件数。4区分は件数 0 でも含める。
    pub async fn skill_level_distribution(&self) -> AppResult<Vec<ChartEntry>> {
        let rows = self.analytics_repo.skill_level_counts().await?;
        let distribution =
            SkillLevelDistribution::from_counts(rows.into_iter().map(|r| (r.skill_level, r.count)));

        debug!(total = distribution.total(), "Skill level distribution");

        Ok(ChartEntry::from_distribution(&distribution))
    }

    pub async fn top_performers(&self) -> AppResult<Vec<TopPerformerRow>> {
        let rows = self.analytics_repo.top_performers().await?;

        if rows.is_empty() {
            return Err(not_found_error("No results found", "top performers"));
        }

        Ok(rows)
    }

    /// 従業員 × スキルの成長曲線
    ///
    /// スキル未指定なら評価済みスキルのうち最小ID、年未指定なら入社四半期以降。
    pub async fn employee_growth(
        &self,
        emp_id: i32,
        query: GrowthQuery,
    ) -> AppResult<Vec<GrowthPoint>> {
        let employee = self
            .employee_repo
            .find_by_id(emp_id)
            .await?
            .ok_or_else(|| not_found_error("Employee not found", "employee growth"))?;

        let skill_id = match query.skill_id {
            Some(skill_id) => skill_id,
            None => {
                let evaluated = self.analytics_repo.evaluated_skill_ids(emp_id).await?;
                default_skill_id(evaluated).ok_or_else(|| {
                    not_found_error("No evaluations found for this employee", "employee growth")
                })?
            }
        };

        let window = GrowthWindow::resolve(query.year, employee.joined_period());
        let points = self.analytics_repo.growth_points(emp_id, skill_id).await?;
        let series = build_series(points, window);

        debug!(emp_id, skill_id, points = series.len(), "Employee growth series");

        if series.is_empty() {
            return Err(not_found_error("No results found", "employee growth"));
        }

        Ok(series)
    }
}
