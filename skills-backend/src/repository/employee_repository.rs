// src/repository/employee_repository.rs

use crate::domain::employee_model::{self, ActiveModel as EmployeeActiveModel, Entity as EmployeeEntity};
use crate::domain::employee_summary::EvaluationSample;
use crate::domain::quarter::Quarter;
use crate::domain::skill_level::SkillLevel;
use chrono::NaiveDate;
use sea_orm::entity::*;
use sea_orm::{ConnectionTrait, DbConn, DbErr, FromQueryResult, QueryOrder, Statement};
use serde::Serialize;

/// 従業員名検索の結果行
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct EmployeeEvaluationRow {
    pub emp_name: String,
    pub dept_name: String,
    pub skill_name: String,
    pub score: f64,
    pub year: i32,
    pub quarter: Quarter,
    pub skill_level: Option<SkillLevel>,
}

/// 直近の評価
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct RecentEvaluationRow {
    pub emp_name: String,
    pub skill_name: String,
    pub score: f64,
}

/// スキル別の従業員スコア
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct SkillScoreRow {
    pub emp_name: String,
    pub quarter: Quarter,
    pub year: i32,
    pub score: f64,
}

#[derive(Debug, FromQueryResult)]
struct SampleRow {
    emp_id: i32,
    emp_name: String,
    dept_name: String,
    skill_name: String,
    score: f64,
    max_score: f64,
}

impl From<SampleRow> for EvaluationSample {
    fn from(row: SampleRow) -> Self {
        Self {
            emp_id: row.emp_id,
            emp_name: row.emp_name,
            dept_name: row.dept_name,
            skill_name: row.skill_name,
            score: row.score,
            max_score: row.max_score,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct CountRow {
    count: i64,
}

/// LIKE のワイルドカードをエスケープして部分一致パターンを作る
pub fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

pub struct EmployeeRepository {
    db: DbConn,
}

impl EmployeeRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, emp_id: i32) -> Result<Option<employee_model::Model>, DbErr> {
        EmployeeEntity::find_by_id(emp_id).one(&self.db).await
    }

    pub async fn find_all(&self) -> Result<Vec<employee_model::Model>, DbErr> {
        EmployeeEntity::find()
            .order_by_asc(employee_model::Column::EmpId)
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        emp_name: String,
        dept_id: i32,
        date_joined: NaiveDate,
    ) -> Result<employee_model::Model, DbErr> {
        let active_model = EmployeeActiveModel {
            emp_name: Set(emp_name),
            dept_id: Set(dept_id),
            date_joined: Set(date_joined),
            ..Default::default()
        };

        active_model.insert(&self.db).await
    }

    /// 従業員名の部分一致（大文字小文字を区別しない）で評価を検索
    pub async fn search_by_name(
        &self,
        emp_name: &str,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<EmployeeEvaluationRow>, DbErr> {
        let sql = r#"
            SELECT e.emp_name, d.dept_name, s.skill_name, se.score, se.year, se.quarter, se.skill_level
            FROM employees e
            JOIN departments d ON e.dept_id = d.dept_id
            JOIN skill_evaluations se ON e.emp_id = se.emp_id
            JOIN skills s ON se.skill_id = s.skill_id
            WHERE e.emp_name ILIKE $1
            ORDER BY s.skill_name, se.eval_id
            LIMIT $2 OFFSET $3
        "#;

        EmployeeEvaluationRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            vec![
                contains_pattern(emp_name).into(),
                (limit as i64).into(),
                (offset as i64).into(),
            ],
        ))
        .all(&self.db)
        .await
    }

    /// 名前検索に一致する評価の総数
    pub async fn count_by_name(&self, emp_name: &str) -> Result<i64, DbErr> {
        let sql = r#"
            SELECT COUNT(*) AS count
            FROM employees e
            JOIN departments d ON e.dept_id = d.dept_id
            JOIN skill_evaluations se ON e.emp_id = se.emp_id
            JOIN skills s ON se.skill_id = s.skill_id
            WHERE e.emp_name ILIKE $1
        "#;

        let row = CountRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            vec![contains_pattern(emp_name).into()],
        ))
        .one(&self.db)
        .await?;

        Ok(row.map_or(0, |r| r.count))
    }

    /// 直近に評価された従業員4名の、それぞれ最新の評価
    pub async fn find_recent_evaluations(&self) -> Result<Vec<RecentEvaluationRow>, DbErr> {
        let sql = r#"
            SELECT e.emp_name, s.skill_name, se.score
            FROM employees e
            JOIN skill_evaluations se ON e.emp_id = se.emp_id
            JOIN skills s ON se.skill_id = s.skill_id
            WHERE se.eval_id IN (
                SELECT MAX(eval_id)
                FROM skill_evaluations
                GROUP BY emp_id
                ORDER BY MAX(eval_id) DESC
                LIMIT 4
            )
            ORDER BY se.eval_id DESC
        "#;

        RecentEvaluationRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            sql,
        ))
        .all(&self.db)
        .await
    }

    /// 従業員要約の材料（従業員名順）
    pub async fn find_evaluation_samples(&self) -> Result<Vec<EvaluationSample>, DbErr> {
        let sql = r#"
            SELECT e.emp_id, e.emp_name, d.dept_name, s.skill_name, se.score, se.max_score
            FROM employees e
            JOIN departments d ON e.dept_id = d.dept_id
            JOIN skill_evaluations se ON e.emp_id = se.emp_id
            JOIN skills s ON se.skill_id = s.skill_id
            ORDER BY e.emp_name, e.emp_id, se.eval_id
        "#;

        let rows = SampleRow::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            sql,
        ))
        .all(&self.db)
        .await?;

        Ok(rows.into_iter().map(EvaluationSample::from).collect())
    }

    /// スキル別の従業員スコア。年が None なら全期間。
    pub async fn find_scores_by_skill(
        &self,
        skill_id: i32,
        year: Option<i32>,
    ) -> Result<Vec<SkillScoreRow>, DbErr> {
        let sql = r#"
            SELECT e.emp_name, se.quarter, se.year, se.score
            FROM skill_evaluations se
            JOIN employees e ON se.emp_id = e.emp_id
            WHERE se.skill_id = $1
              AND ($2::int IS NULL OR se.year = $2)
            ORDER BY e.emp_name, se.year, se.quarter, se.eval_id
        "#;

        SkillScoreRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            vec![skill_id.into(), year.into()],
        ))
        .all(&self.db)
        .await
    }
}
