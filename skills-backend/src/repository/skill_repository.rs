// src/repository/skill_repository.rs

use crate::domain::skill_category_model::{
    self, ActiveModel as CategoryActiveModel, Entity as CategoryEntity,
};
use crate::domain::skill_evaluation_model::{self, Entity as EvaluationEntity};
use crate::domain::skill_model::{self, ActiveModel as SkillActiveModel, Entity as SkillEntity};
use sea_orm::entity::*;
use sea_orm::sea_query::{Expr, OnConflict};
use sea_orm::{
    ConnectionTrait, DbConn, DbErr, FromQueryResult, QueryFilter, QueryOrder, Statement,
};
use serde::Serialize;

/// スキル一覧の行（カテゴリと評価済み従業員数つき）
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct SkillOverviewRow {
    pub skill_id: i32,
    pub skill_name: String,
    pub skill_category: String,
    pub employee_count: i64,
}

/// 全評価の正規化スコア集計（丸め前）
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct NormalizedScoreAggregate {
    pub average_score: Option<f64>,
    pub high_score: Option<f64>,
}

/// 従業員が評価を受けたスキル
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct EmployeeSkillRow {
    pub skill_id: i32,
    pub skill_name: String,
}

pub struct SkillRepository {
    db: DbConn,
}

impl SkillRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, skill_id: i32) -> Result<Option<skill_model::Model>, DbErr> {
        SkillEntity::find_by_id(skill_id).one(&self.db).await
    }

    /// カテゴリ名順・スキル名順の一覧
    pub async fn find_overview(&self) -> Result<Vec<SkillOverviewRow>, DbErr> {
        let sql = r#"
            SELECT s.skill_id,
                   s.skill_name,
                   COALESCE(sc.category_name, $1) AS skill_category,
                   COUNT(DISTINCT se.emp_id) AS employee_count
            FROM skills s
            LEFT JOIN skill_categories sc ON s.category_id = sc.category_id
            LEFT JOIN skill_evaluations se ON s.skill_id = se.skill_id
            GROUP BY s.skill_id, s.skill_name, sc.category_name
            ORDER BY skill_category, s.skill_name
        "#;

        SkillOverviewRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            vec![skill_category_model::UNCATEGORIZED_LABEL.into()],
        ))
        .all(&self.db)
        .await
    }

    /// スキルを追加する。同名スキルがあれば何もしない。
    ///
    /// 戻り値は挿入された行数（0 または 1）。
    pub async fn insert_if_absent(
        &self,
        skill_name: String,
        category_id: Option<i32>,
        max_score: f64,
    ) -> Result<u64, DbErr> {
        let active_model = SkillActiveModel {
            skill_name: Set(skill_name),
            category_id: Set(category_id),
            max_score: Set(max_score),
            ..Default::default()
        };

        SkillEntity::insert(active_model)
            .on_conflict(
                OnConflict::column(skill_model::Column::SkillName)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
    }

    pub async fn delete_by_id(&self, skill_id: i32) -> Result<u64, DbErr> {
        let result = SkillEntity::delete_by_id(skill_id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }

    /// 全評価の正規化スコア（0-10）の平均と最高
    pub async fn normalized_score_aggregate(&self) -> Result<NormalizedScoreAggregate, DbErr> {
        let sql = r#"
            SELECT AVG(se.score * 10.0 / se.max_score) AS average_score,
                   MAX(se.score * 10.0 / se.max_score) AS high_score
            FROM skill_evaluations se
            WHERE se.max_score > 0
        "#;

        let row = NormalizedScoreAggregate::find_by_statement(Statement::from_string(
            self.db.get_database_backend(),
            sql,
        ))
        .one(&self.db)
        .await?;

        Ok(row.unwrap_or(NormalizedScoreAggregate {
            average_score: None,
            high_score: None,
        }))
    }

    /// 従業員が評価を受けたスキル（スキル名順）
    pub async fn find_by_employee(&self, emp_id: i32) -> Result<Vec<EmployeeSkillRow>, DbErr> {
        let sql = r#"
            SELECT s.skill_id, s.skill_name
            FROM skill_evaluations se
            JOIN skills s ON se.skill_id = s.skill_id
            WHERE se.emp_id = $1
            GROUP BY s.skill_id, s.skill_name
            ORDER BY s.skill_name
        "#;

        EmployeeSkillRow::find_by_statement(Statement::from_sql_and_values(
            self.db.get_database_backend(),
            sql,
            vec![emp_id.into()],
        ))
        .all(&self.db)
        .await
    }

    // --- カテゴリ ---

    pub async fn find_category_by_id(
        &self,
        category_id: i32,
    ) -> Result<Option<skill_category_model::Model>, DbErr> {
        CategoryEntity::find_by_id(category_id).one(&self.db).await
    }

    pub async fn find_all_categories(&self) -> Result<Vec<skill_category_model::Model>, DbErr> {
        CategoryEntity::find()
            .order_by_asc(skill_category_model::Column::CategoryName)
            .all(&self.db)
            .await
    }

    pub async fn create_category(
        &self,
        category_name: String,
    ) -> Result<skill_category_model::Model, DbErr> {
        let active_model = CategoryActiveModel {
            category_name: Set(category_name),
            ..Default::default()
        };

        active_model.insert(&self.db).await
    }

    // --- 最大スコア変更（トランザクション内で使う） ---

    /// スキルの全評価（評価ID順）
    pub async fn evaluations_for_skill<C: ConnectionTrait>(
        conn: &C,
        skill_id: i32,
    ) -> Result<Vec<skill_evaluation_model::Model>, DbErr> {
        EvaluationEntity::find()
            .filter(skill_evaluation_model::Column::SkillId.eq(skill_id))
            .order_by_asc(skill_evaluation_model::Column::EvalId)
            .all(conn)
            .await
    }

    /// 評価1件を新しい最大スコアへ比例再計算して保存
    pub async fn rescale_evaluation<C: ConnectionTrait>(
        conn: &C,
        evaluation: &skill_evaluation_model::Model,
        new_max_score: f64,
    ) -> Result<skill_evaluation_model::Model, DbErr> {
        evaluation.rescaled(new_max_score).update(conn).await
    }

    /// スキル本体の最大スコアを更新
    pub async fn update_max_score<C: ConnectionTrait>(
        conn: &C,
        skill_id: i32,
        new_max_score: f64,
    ) -> Result<u64, DbErr> {
        let result = SkillEntity::update_many()
            .col_expr(skill_model::Column::MaxScore, Expr::value(new_max_score))
            .filter(skill_model::Column::SkillId.eq(skill_id))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }
}
