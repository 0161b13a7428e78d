// src/api/dto/evaluation_dto.rs

use crate::domain::quarter::Quarter;
use crate::domain::skill_evaluation_model::EvaluationInput;
use crate::error::AppError;
use crate::repository::evaluation_repository::{
    EvaluationFilter, EvaluationFilterSet, EvaluationSort,
};
use crate::types::query::{
    deserialize_f64_lenient, deserialize_i32_lenient, deserialize_optional_i32, LimitOffsetQuery,
};
use crate::utils::error_helper::validation_error;
use crate::utils::validation::{self, year, COMMENT_MAX_LENGTH};
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- クエリDTO ---

/// `GET /evaluations/details`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluationListQuery {
    #[serde(flatten)]
    pub page: LimitOffsetQuery,
    #[serde(default, rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

impl EvaluationListQuery {
    pub fn sort(&self) -> EvaluationSort {
        EvaluationSort::parse_lenient(self.sort_by.as_deref(), self.order.as_deref())
    }
}

/// `GET /evaluations/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluationSearchQuery {
    #[serde(default, rename = "empId", deserialize_with = "deserialize_optional_i32")]
    pub emp_id: Option<i32>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub skill: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub year: Option<i32>,
    #[serde(default, rename = "yearFrom", deserialize_with = "deserialize_optional_i32")]
    pub year_from: Option<i32>,
    #[serde(default, rename = "yearTo", deserialize_with = "deserialize_optional_i32")]
    pub year_to: Option<i32>,
    #[serde(default, rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub order: Option<String>,
}

/// 空文字は未指定扱い
fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl EvaluationSearchQuery {
    /// 指定されたフィルタのみを AND で束ねる
    pub fn filters(&self) -> EvaluationFilterSet {
        let year_range = match (self.year_from, self.year_to) {
            (None, None) => None,
            (from, to) => Some(EvaluationFilter::YearRange {
                from: from.unwrap_or(year::MIN),
                to: to.unwrap_or(year::MAX),
            }),
        };

        EvaluationFilterSet::new()
            .with(self.emp_id.map(EvaluationFilter::EmployeeId))
            .with(non_blank(&self.department).map(EvaluationFilter::Department))
            .with(non_blank(&self.skill).map(EvaluationFilter::Skill))
            .with(self.year.map(EvaluationFilter::Year))
            .with(year_range)
    }

    pub fn sort(&self) -> EvaluationSort {
        EvaluationSort::parse_lenient(self.sort_by.as_deref(), self.order.as_deref())
    }
}

/// `POST /evaluations/add` の対象
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluationTargetQuery {
    #[serde(default, rename = "empId", deserialize_with = "deserialize_optional_i32")]
    pub emp_id: Option<i32>,
    #[serde(default, rename = "skillId", deserialize_with = "deserialize_optional_i32")]
    pub skill_id: Option<i32>,
}

impl EvaluationTargetQuery {
    /// (emp_id, skill_id)。どちらか欠けていれば 400。
    pub fn require(&self) -> Result<(i32, i32), AppError> {
        match (self.emp_id, self.skill_id) {
            (Some(emp_id), Some(skill_id)) => Ok((emp_id, skill_id)),
            _ => Err(AppError::BadRequest(
                "empId and skillId are required".to_string(),
            )),
        }
    }
}

// --- リクエストDTO ---

/// 評価の作成・更新
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EvaluationRequest {
    #[serde(deserialize_with = "deserialize_f64_lenient")]
    pub score: f64,

    #[validate(custom(function = validation::validate_quarter))]
    pub quarter: String,

    #[validate(range(
        min = year::MIN,
        max = year::MAX,
        message = "Year must be between 1900 and 2100"
    ))]
    #[serde(deserialize_with = "deserialize_i32_lenient")]
    pub year: i32,

    #[validate(length(
        max = COMMENT_MAX_LENGTH,
        message = "Comment must not exceed 1000 characters"
    ))]
    pub comment: Option<String>,
}

impl EvaluationRequest {
    pub fn into_input(self) -> Result<EvaluationInput, AppError> {
        if !self.score.is_finite() {
            return Err(validation_error("score", "Score must be a number"));
        }

        let quarter = self
            .quarter
            .parse::<Quarter>()
            .map_err(|_| validation_error("quarter", "Quarter must be one of Q1, Q2, Q3, Q4"))?;

        Ok(EvaluationInput {
            score: self.score,
            quarter,
            year: self.year,
            comment: self.comment,
        })
    }
}

// --- レスポンスDTO ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedEvaluationResponse {
    pub message: String,
    pub eval_id: i32,
}
