// src/domain/skill_level.rs

//! スコア正規化とスキルレベル分類
//!
//! スキルごとに最大スコアが異なるため、集計や比較の前に 0-10 の共通スケールへ正規化する。

use sea_orm::entity::prelude::*;
use sea_orm::sea_query::StringLen;
use serde::{Deserialize, Serialize};

/// 正規化後の共通スケール上限
pub const NORMALIZED_SCALE: f64 = 10.0;

/// スキルの既定の最大スコア
pub const DEFAULT_MAX_SCORE: f64 = 10.0;

/// 評価スコアから導出されるスキルレベル
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    DeriveActiveEnum,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum SkillLevel {
    #[sea_orm(string_value = "Beginner")]
    Beginner,
    #[sea_orm(string_value = "Intermediate")]
    Intermediate,
    #[sea_orm(string_value = "Advanced")]
    Advanced,
    #[sea_orm(string_value = "Expert")]
    Expert,
}

impl SkillLevel {
    pub const ALL: [SkillLevel; 4] = [
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }

    /// 0-10 スケールのスコアを分類する
    ///
    /// 境界は両端を含む: 0-3, 4-6, 7-8, 9-10。範囲外や区間の隙間（例: 3.5）は `None`。
    pub fn classify(score: f64) -> Option<Self> {
        if (0.0..=3.0).contains(&score) {
            Some(Self::Beginner)
        } else if (4.0..=6.0).contains(&score) {
            Some(Self::Intermediate)
        } else if (7.0..=8.0).contains(&score) {
            Some(Self::Advanced)
        } else if (9.0..=10.0).contains(&score) {
            Some(Self::Expert)
        } else {
            None
        }
    }

    /// 生スコアを正規化してから分類する
    pub fn classify_raw(score: f64, max_score: f64) -> Option<Self> {
        normalize(score, max_score).and_then(Self::classify)
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `score * 10 / max_score`。最大スコアが 0 以下なら `None`。
pub fn normalize(score: f64, max_score: f64) -> Option<f64> {
    if max_score > 0.0 && max_score.is_finite() && score.is_finite() {
        Some(score * NORMALIZED_SCALE / max_score)
    } else {
        None
    }
}

/// 最大スコア変更に伴う比例再計算。旧最大スコアが 0 以下ならスコアはそのまま。
pub fn rescale(score: f64, old_max: f64, new_max: f64) -> f64 {
    if old_max > 0.0 {
        score * new_max / old_max
    } else {
        score
    }
}

/// 小数点以下 `places` 桁に丸める（0.5 は 0 から遠い方へ）
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// スキルレベル別の件数分布
///
/// 件数 0 のレベルも必ず含める。未分類の評価は件数がある場合のみ末尾に付ける。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillLevelDistribution {
    counts: [i64; 4],
    unclassified: i64,
}

impl SkillLevelDistribution {
    pub const UNCLASSIFIED_LABEL: &'static str = "Unclassified";

    pub fn from_counts<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (Option<SkillLevel>, i64)>,
    {
        let mut distribution = Self::default();
        for (level, count) in rows {
            distribution.add(level, count);
        }
        distribution
    }

    pub fn add(&mut self, level: Option<SkillLevel>, count: i64) {
        match level {
            Some(level) => self.counts[level as usize] += count,
            None => self.unclassified += count,
        }
    }

    pub fn count(&self, level: SkillLevel) -> i64 {
        self.counts[level as usize]
    }

    pub fn unclassified(&self) -> i64 {
        self.unclassified
    }

    pub fn total(&self) -> i64 {
        self.counts.iter().sum::<i64>() + self.unclassified
    }

    /// (ラベル, 件数) の一覧。Beginner → Expert の順
    pub fn buckets(&self) -> Vec<(&'static str, i64)> {
        let mut buckets: Vec<(&'static str, i64)> = SkillLevel::ALL
            .iter()
            .map(|level| (level.as_str(), self.count(*level)))
            .collect();
        if self.unclassified > 0 {
            buckets.push((Self::UNCLASSIFIED_LABEL, self.unclassified));
        }
        buckets
    }
}
