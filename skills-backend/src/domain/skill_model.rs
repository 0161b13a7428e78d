// src/domain/skill_model.rs

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub skill_id: i32,
    #[sea_orm(unique)]
    pub skill_name: String,
    pub category_id: Option<i32>,
    pub max_score: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::skill_category_model::Entity",
        from = "Column::CategoryId",
        to = "super::skill_category_model::Column::CategoryId",
        on_delete = "SetNull"
    )]
    Category,
    #[sea_orm(has_many = "super::skill_evaluation_model::Entity")]
    Evaluations,
}

impl Related<super::skill_category_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::skill_evaluation_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// スコアがこのスキルの採点範囲内か
    pub fn accepts_score(&self, score: f64) -> bool {
        score.is_finite() && score >= 0.0 && score <= self.max_score
    }
}
