// src/repository/analytics_repository.rs

//! 集計専用の読み取りクエリ

use crate::domain::growth_series::GrowthPoint;
use crate::domain::quarter::Quarter;
use crate::domain::skill_evaluation_model::{self, Entity as EvaluationEntity};
use crate::domain::skill_level::SkillLevel;
use sea_orm::entity::*;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ConnectionTrait, DbConn, DbErr, FromQueryResult, QueryFilter, QueryOrder, QuerySelect,
    Statement,
};

/// 四半期ごとの平均（丸め前）
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct QuarterAverageRow {
    pub average_score: Option<f64>,
    pub quarter: Quarter,
    pub year: i32,
}

/// 部署ごとの平均（丸め前）
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct DepartmentAverageRow {
    pub dept_name: String,
    pub average_score: Option<f64>,
}

/// スキルレベルごとの件数
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct SkillLevelCountRow {
    pub skill_level: Option<SkillLevel>,
    pub count: i64,
}

/// 素点上位の評価
#[derive(Debug, Clone, PartialEq, serde::Serialize, FromQueryResult)]
pub struct TopPerformerRow {
    pub emp_name: String,
    pub dept_name: String,
    pub score: f64,
    pub max_score: f64,
}

pub const TOP_PERFORMER_LIMIT: i64 = 5;

pub struct AnalyticsRepository {
    db: DbConn,
}

impl AnalyticsRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// 指定年の四半期別平均素点（四半期順）
    pub async fn quarter_averages(&self, year: i32) -> Result<Vec<QuarterAverageRow>, DbErr> {
        let sql = r#"
            SELECT AVG(score) AS average_score, quarter, year
            FROM skill_evaluations
            WHERE year = $1
            GROUP BY quarter, year
            ORDER BY quarter
        "#;

        QuarterAverageRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            vec![year.into()],
        ))
        .all(&self.db)
        .await
    }

    /// 部署別平均素点（部署名順）
    pub async fn department_averages(&self) -> Result<Vec<DepartmentAverageRow>, DbErr> {
        let sql = r#"
            SELECT d.dept_name, AVG(se.score) AS average_score
            FROM departments d
            JOIN employees e ON d.dept_id = e.dept_id
            JOIN skill_evaluations se ON e.emp_id = se.emp_id
            GROUP BY d.dept_name
            ORDER BY d.dept_name
        "#;

        DepartmentAverageRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            sql,
        ))
        .all(&self.db)
        .await
    }

    /// スキルレベル別の評価件数（未分類は NULL）
    pub async fn skill_level_counts(&self) -> Result<Vec<SkillLevelCountRow>, DbErr> {
        EvaluationEntity::find()
            .select_only()
            .column(skill_evaluation_model::Column::SkillLevel)
            .column_as(
                Expr::col(skill_evaluation_model::Column::EvalId).count(),
                "count",
            )
            .group_by(skill_evaluation_model::Column::SkillLevel)
            .into_model::<SkillLevelCountRow>()
            .all(&self.db)
            .await
    }

    /// 素点の高い評価（従業員・部署・素点・最大スコアの組で重複排除）
    pub async fn top_performers(&self) -> Result<Vec<TopPerformerRow>, DbErr> {
        let sql = r#"
            SELECT DISTINCT e.emp_name, d.dept_name, se.score, se.max_score
            FROM employees e
            JOIN departments d ON e.dept_id = d.dept_id
            JOIN skill_evaluations se ON e.emp_id = se.emp_id
            ORDER BY se.score DESC, e.emp_name, d.dept_name, se.max_score
            LIMIT $1
        "#;

        TopPerformerRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            vec![TOP_PERFORMER_LIMIT.into()],
        ))
        .all(&self.db)
        .await
    }

    /// 従業員が評価を受けたスキルID（重複なし・昇順）
    pub async fn evaluated_skill_ids(&self, emp_id: i32) -> Result<Vec<i32>, DbErr> {
        EvaluationEntity::find()
            .select_only()
            .column(skill_evaluation_model::Column::SkillId)
            .filter(skill_evaluation_model::Column::EmpId.eq(emp_id))
            .distinct()
            .order_by_asc(skill_evaluation_model::Column::SkillId)
            .into_tuple::<i32>()
            .all(&self.db)
            .await
    }

    /// 従業員 × スキルの全評価（評価ID順、期間での絞り込みは呼び出し側）
    pub async fn growth_points(
        &self,
        emp_id: i32,
        skill_id: i32,
    ) -> Result<Vec<GrowthPoint>, DbErr> {
        let sql = r#"
            SELECT se.skill_id, s.skill_name, se.year, se.quarter, se.score
            FROM skill_evaluations se
            JOIN skills s ON se.skill_id = s.skill_id
            WHERE se.emp_id = $1 AND se.skill_id = $2
            ORDER BY se.eval_id
        "#;

        GrowthPoint::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            vec![emp_id.into(), skill_id.into()],
        ))
        .all(&self.db)
        .await
    }
}
