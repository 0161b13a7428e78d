// src/domain/skill_evaluation_model.rs

use super::quarter::Quarter;
use super::skill_level::{self, SkillLevel};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skill_evaluations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub eval_id: i32,
    pub emp_id: i32,
    pub skill_id: i32,
    pub score: f64,
    /// 評価時点のスキル最大スコア（スキル側の変更時に再計算で同期される）
    pub max_score: f64,
    pub quarter: Quarter,
    pub year: i32,
    pub comment: Option<String>,
    pub skill_level: Option<SkillLevel>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee_model::Entity",
        from = "Column::EmpId",
        to = "super::employee_model::Column::EmpId",
        on_delete = "Cascade"
    )]
    Employee,
    #[sea_orm(
        belongs_to = "super::skill_model::Entity",
        from = "Column::SkillId",
        to = "super::skill_model::Column::SkillId",
        on_delete = "Cascade"
    )]
    Skill,
}

impl Related<super::employee_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::skill_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skill.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// 評価の作成・更新入力
#[derive(Debug, Clone)]
pub struct EvaluationInput {
    pub score: f64,
    pub quarter: Quarter,
    pub year: i32,
    pub comment: Option<String>,
}

impl Model {
    /// 0-10 スケールに正規化したスコア
    pub fn normalized_score(&self) -> Option<f64> {
        skill_level::normalize(self.score, self.max_score)
    }

    /// 新しい最大スコアへ比例再計算した ActiveModel。
    /// `skill_level` は評価時の分類のまま保持する。
    pub fn rescaled(&self, new_max_score: f64) -> ActiveModel {
        let mut active: ActiveModel = self.clone().into();
        active.score = Set(skill_level::rescale(self.score, self.max_score, new_max_score));
        active.max_score = Set(new_max_score);
        active
    }

    /// ID 指定の更新。スキルレベルは行の最大スコアで再分類する。
    pub fn updated(&self, input: EvaluationInput) -> ActiveModel {
        let mut active: ActiveModel = self.clone().into();
        active.skill_level = Set(SkillLevel::classify_raw(input.score, self.max_score));
        active.score = Set(input.score);
        active.quarter = Set(input.quarter);
        active.year = Set(input.year);
        active.comment = Set(input.comment);
        active
    }
}

impl ActiveModel {
    /// 新規評価。スキルの現在の最大スコアを複製し、スキルレベルを分類する。
    pub fn from_input(emp_id: i32, skill_id: i32, max_score: f64, input: EvaluationInput) -> Self {
        Self {
            emp_id: Set(emp_id),
            skill_id: Set(skill_id),
            score: Set(input.score),
            max_score: Set(max_score),
            quarter: Set(input.quarter),
            year: Set(input.year),
            comment: Set(input.comment),
            skill_level: Set(SkillLevel::classify_raw(input.score, max_score)),
            ..Default::default()
        }
    }
}
