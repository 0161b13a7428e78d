// src/domain/skill_category_model.rs

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 未分類スキルの表示ラベル
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skill_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub category_id: i32,
    #[sea_orm(unique)]
    pub category_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::skill_model::Entity")]
    Skills,
}

impl Related<super::skill_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skills.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
