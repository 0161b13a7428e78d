// src/domain/growth_series.rs

//! 従業員 × スキルの成長曲線
//!
//! 評価行を (年, 四半期) の時系列に並べ、期間条件で絞り込む。

use super::quarter::Quarter;
use sea_orm::FromQueryResult;
use serde::Serialize;

/// 成長曲線の1点
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct GrowthPoint {
    pub skill_id: i32,
    pub skill_name: String,
    pub year: i32,
    pub quarter: Quarter,
    pub score: f64,
}

impl GrowthPoint {
    pub fn period(&self) -> (i32, Quarter) {
        (self.year, self.quarter)
    }
}

/// 成長曲線に含める期間
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthWindow {
    /// 指定年のみ
    Year(i32),
    /// 指定 (年, 四半期) 以降（入社時点を渡す）
    Since { year: i32, quarter: Quarter },
}

impl GrowthWindow {
    /// 年指定があればその年、なければ入社時点以降
    pub fn resolve(year: Option<i32>, joined: (i32, Quarter)) -> Self {
        match year {
            Some(year) => Self::Year(year),
            None => Self::Since {
                year: joined.0,
                quarter: joined.1,
            },
        }
    }

    pub fn contains(&self, year: i32, quarter: Quarter) -> bool {
        match *self {
            Self::Year(target) => year == target,
            Self::Since {
                year: start_year,
                quarter: start_quarter,
            } => (year, quarter) >= (start_year, start_quarter),
        }
    }
}

/// 期間で絞り込み、(年, 四半期) 昇順に並べる
///
/// 同一期間に複数評価がある場合は入力順（評価ID順）を保つ。
pub fn build_series<I>(points: I, window: GrowthWindow) -> Vec<GrowthPoint>
where
    I: IntoIterator<Item = GrowthPoint>,
{
    let mut series: Vec<GrowthPoint> = points
        .into_iter()
        .filter(|point| window.contains(point.year, point.quarter))
        .collect();
    series.sort_by_key(GrowthPoint::period);
    series
}

/// スキル未指定時に使うスキル: 評価済みスキルのうち最小の ID
pub fn default_skill_id<I>(evaluated_skill_ids: I) -> Option<i32>
where
    I: IntoIterator<Item = i32>,
{
    evaluated_skill_ids.into_iter().min()
}
