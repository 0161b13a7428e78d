// src/domain/employee_model.rs

use super::quarter::Quarter;
use chrono::{Datelike, NaiveDate};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub emp_id: i32,
    pub emp_name: String,
    pub dept_id: i32,
    pub date_joined: NaiveDate,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::department_model::Entity",
        from = "Column::DeptId",
        to = "super::department_model::Column::DeptId"
    )]
    Department,
    #[sea_orm(has_many = "super::skill_evaluation_model::Entity")]
    Evaluations,
}

impl Related<super::department_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::skill_evaluation_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// 入社した (年, 四半期)。成長曲線の既定の開始点になる。
    pub fn joined_period(&self) -> (i32, Quarter) {
        let quarter = Quarter::from_month(self.date_joined.month()).unwrap_or(Quarter::Q1);
        (self.date_joined.year(), quarter)
    }
}
