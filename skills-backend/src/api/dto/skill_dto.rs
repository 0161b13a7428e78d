// src/api/dto/skill_dto.rs

use crate::domain::skill_level::round_to;
use crate::repository::skill_repository::NormalizedScoreAggregate;
use crate::types::query::{deserialize_optional_f64_lenient, deserialize_optional_i32};
use crate::utils::validation::{self, name};
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- リクエストDTO ---

/// スキルの追加（同名は無視される）
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSkillRequest {
    #[serde(default, rename = "skillName")]
    #[validate(
        length(
            min = name::MIN_LENGTH,
            max = name::MAX_LENGTH,
            message = "Skill name must be between 1 and 100 characters"
        ),
        custom(function = validation::validate_not_blank)
    )]
    pub skill_name: String,

    pub category_id: Option<i32>,

    /// 省略時は 10
    #[serde(default, deserialize_with = "deserialize_optional_f64_lenient")]
    pub max_score: Option<f64>,
}

/// 最大スコアの変更
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EditSkillRequest {
    #[serde(default, deserialize_with = "deserialize_optional_f64_lenient")]
    pub max_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateCategoryRequest {
    #[serde(default)]
    #[validate(
        length(
            min = name::MIN_LENGTH,
            max = name::MAX_LENGTH,
            message = "Category name must be between 1 and 100 characters"
        ),
        custom(function = validation::validate_not_blank)
    )]
    pub category_name: String,
}

// --- クエリDTO ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeSkillsQuery {
    #[serde(default, rename = "empId", deserialize_with = "deserialize_optional_i32")]
    pub emp_id: Option<i32>,
}

// --- レスポンスDTO ---

/// 正規化スコアの平均（小数1桁）と最高（整数）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAverageResponse {
    pub average_score: Option<f64>,
    pub high_score: Option<f64>,
}

impl From<NormalizedScoreAggregate> for SkillAverageResponse {
    fn from(aggregate: NormalizedScoreAggregate) -> Self {
        Self {
            average_score: aggregate.average_score.map(|avg| round_to(avg, 1)),
            high_score: aggregate.high_score.map(|high| round_to(high, 0)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RescaleResponse {
    pub message: String,
    pub updated: u64,
}
