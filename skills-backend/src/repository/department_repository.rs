// src/repository/department_repository.rs

use crate::domain::department_model::{
    self, ActiveModel as DepartmentActiveModel, Entity as DepartmentEntity,
};
use sea_orm::entity::*;
use sea_orm::{
    ConnectionTrait, DbConn, DbErr, FromQueryResult, QueryOrder, QuerySelect, Statement,
};
use serde::Serialize;

/// 部署と評価最大スコアごとの集計行
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct DepartmentDetailRow {
    pub dept_id: i32,
    pub dept_name: String,
    pub description: Option<String>,
    pub average_score: Option<f64>,
    pub max_score: f64,
    pub emp_count: i64,
}

/// 部署名のみの行
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct DepartmentNameRow {
    pub dept_name: String,
}

pub struct DepartmentRepository {
    db: DbConn,
}

impl DepartmentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, dept_id: i32) -> Result<Option<department_model::Model>, DbErr> {
        DepartmentEntity::find_by_id(dept_id).one(&self.db).await
    }

    /// 全部署名（ID順）
    pub async fn find_all_names(&self) -> Result<Vec<DepartmentNameRow>, DbErr> {
        DepartmentEntity::find()
            .select_only()
            .column(department_model::Column::DeptName)
            .order_by_asc(department_model::Column::DeptId)
            .into_model::<DepartmentNameRow>()
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        dept_name: String,
        description: Option<String>,
    ) -> Result<department_model::Model, DbErr> {
        let active_model = DepartmentActiveModel {
            dept_name: Set(dept_name),
            description: Set(description),
            ..Default::default()
        };

        active_model.insert(&self.db).await
    }

    /// 部署 × 評価最大スコアごとの平均スコアと従業員数
    pub async fn find_details(&self) -> Result<Vec<DepartmentDetailRow>, DbErr> {
        let sql = r#"
            SELECT d.dept_id, d.dept_name, d.description,
                   AVG(se.score) AS average_score,
                   se.max_score,
                   COUNT(DISTINCT e.emp_id) AS emp_count
            FROM departments d
            JOIN employees e ON d.dept_id = e.dept_id
            JOIN skill_evaluations se ON e.emp_id = se.emp_id
            GROUP BY d.dept_id, d.dept_name, d.description, se.max_score
            ORDER BY d.dept_id, se.max_score
        "#;

        DepartmentDetailRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            sql,
        ))
        .all(&self.db)
        .await
    }
}
