// src/api/dto/employee_dto.rs

use crate::types::query::{deserialize_optional_i32, LimitOffsetQuery};
use crate::utils::validation::{self, name};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- クエリDTO ---

/// `GET /employees/search`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeSearchQuery {
    #[serde(default, rename = "empName")]
    pub emp_name: String,
    #[serde(flatten)]
    pub page: LimitOffsetQuery,
}

/// `GET /employees/by-skill`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeesBySkillQuery {
    #[serde(default, rename = "skillId", deserialize_with = "deserialize_optional_i32")]
    pub skill_id: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub year: Option<i32>,
}

// --- リクエストDTO ---

/// 従業員の追加
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    #[validate(
        length(
            min = name::MIN_LENGTH,
            max = name::MAX_LENGTH,
            message = "Employee name must be between 1 and 100 characters"
        ),
        custom(function = validation::validate_not_blank)
    )]
    pub emp_name: String,

    pub dept_id: i32,

    /// 省略時は当日
    pub date_joined: Option<NaiveDate>,
}
