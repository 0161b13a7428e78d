// src/api/dto/department_dto.rs

use crate::domain::skill_level::round_to;
use crate::repository::department_repository::DepartmentDetailRow;
use crate::utils::validation::{self, name};
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- リクエストDTO ---

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    #[validate(
        length(
            min = name::MIN_LENGTH,
            max = name::MAX_LENGTH,
            message = "Department name must be between 1 and 100 characters"
        ),
        custom(function = validation::validate_not_blank)
    )]
    pub dept_name: String,

    #[validate(length(max = 500, message = "Description must not exceed 500 characters"))]
    pub description: Option<String>,
}

// --- レスポンスDTO ---

/// 部署 × 最大スコア単位の集計
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentDetailResponse {
    pub dept_id: i32,
    pub dept_name: String,
    pub description: Option<String>,
    pub average_score: Option<f64>,
    pub max_score: f64,
    pub emp_count: i64,
}

impl From<DepartmentDetailRow> for DepartmentDetailResponse {
    fn from(row: DepartmentDetailRow) -> Self {
        Self {
            dept_id: row.dept_id,
            dept_name: row.dept_name,
            description: row.description,
            average_score: row.average_score.map(|avg| round_to(avg, 1)),
            max_score: row.max_score,
            emp_count: row.emp_count,
        }
    }
}
