// src/api/dto/analytics_dto.rs

use crate::domain::quarter::Quarter;
use crate::domain::skill_level::{round_to, SkillLevelDistribution};
use crate::repository::analytics_repository::{DepartmentAverageRow, QuarterAverageRow};
use crate::types::query::deserialize_optional_i32;
use serde::{Deserialize, Serialize};

/// 平均スコアの表示桁数
const AVERAGE_PLACES: u32 = 1;

// --- クエリDTO ---

/// `GET /analytics/quarter-wise`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuarterWiseQuery {
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub year: Option<i32>,
}

/// `GET /analytics/employee-growth/{empId}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GrowthQuery {
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_i32")]
    pub skill_id: Option<i32>,
}

// --- レスポンスDTO ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuarterAverageResponse {
    pub average_score: Option<f64>,
    pub quarter: Quarter,
    pub year: i32,
}

impl From<QuarterAverageRow> for QuarterAverageResponse {
    fn from(row: QuarterAverageRow) -> Self {
        Self {
            average_score: row.average_score.map(|avg| round_to(avg, AVERAGE_PLACES)),
            quarter: row.quarter,
            year: row.year,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepartmentAverageResponse {
    pub dept_name: String,
    pub average_score: Option<f64>,
}

impl From<DepartmentAverageRow> for DepartmentAverageResponse {
    fn from(row: DepartmentAverageRow) -> Self {
        Self {
            dept_name: row.dept_name,
            average_score: row.average_score.map(|avg| round_to(avg, AVERAGE_PLACES)),
        }
    }
}

/// チャート用の `{ name, value }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub name: String,
    pub value: i64,
}

impl ChartEntry {
    pub fn from_distribution(distribution: &SkillLevelDistribution) -> Vec<Self> {
        distribution
            .buckets()
            .into_iter()
            .map(|(name, value)| Self {
                name: name.to_string(),
                value,
            })
            .collect()
    }
}
