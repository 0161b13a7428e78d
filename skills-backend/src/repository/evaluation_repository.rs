// src/repository/evaluation_repository.rs

//! 評価レコードの読み書きと、一覧・検索クエリの組み立て
//!
//! 検索条件は `EvaluationFilter` を `Condition` に写像して組み立て、
//! 並び替え列は `SortColumn` の許可リストに限定する。

use crate::domain::department_model;
use crate::domain::employee_model;
use crate::domain::quarter::Quarter;
use crate::domain::skill_evaluation_model::{
    self, ActiveModel as EvaluationActiveModel, Entity as EvaluationEntity,
};
use crate::domain::skill_level::SkillLevel;
use crate::domain::skill_model;
use crate::types::query::SortOrder;
use sea_orm::entity::*;
use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::{
    Condition, DbConn, DbErr, FromQueryResult, JoinType, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Select,
};
use serde::Serialize;

/// 一覧・検索の結果行
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult)]
pub struct EvaluationRow {
    pub eval_id: i32,
    pub emp_name: String,
    pub dept_name: String,
    pub skill_name: String,
    pub skill_level: Option<SkillLevel>,
    pub score: f64,
    pub max_score: f64,
    pub quarter: Quarter,
    pub year: i32,
    pub comment: Option<String>,
}

/// 検索可能な項目
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationFilter {
    EmployeeId(i32),
    /// 部署名（大文字小文字を区別しない完全一致）
    Department(String),
    /// スキル名（大文字小文字を区別しない完全一致）
    Skill(String),
    Year(i32),
    YearRange { from: i32, to: i32 },
}

fn lower_eq<T, C>(table: T, column: C, value: &str) -> SimpleExpr
where
    T: sea_orm::sea_query::IntoIden + 'static,
    C: sea_orm::sea_query::IntoIden + 'static,
{
    Expr::expr(Func::lower(Expr::col((table, column)))).eq(Func::lower(Expr::val(value.to_string())))
}

impl EvaluationFilter {
    pub fn to_condition(&self) -> SimpleExpr {
        match self {
            Self::EmployeeId(emp_id) => skill_evaluation_model::Column::EmpId.eq(*emp_id),
            Self::Department(name) => lower_eq(
                department_model::Entity,
                department_model::Column::DeptName,
                name,
            ),
            Self::Skill(name) => lower_eq(skill_model::Entity, skill_model::Column::SkillName, name),
            Self::Year(year) => skill_evaluation_model::Column::Year.eq(*year),
            Self::YearRange { from, to } => {
                skill_evaluation_model::Column::Year.between(*from, *to)
            }
        }
    }
}

/// 与えられた条件の AND 結合。未指定の条件は含めない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluationFilterSet {
    filters: Vec<EvaluationFilter>,
}

impl EvaluationFilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, filter: Option<EvaluationFilter>) -> Self {
        if let Some(filter) = filter {
            self.filters.push(filter);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn filters(&self) -> &[EvaluationFilter] {
        &self.filters
    }

    pub fn to_condition(&self) -> Condition {
        self.filters
            .iter()
            .fold(Condition::all(), |condition, filter| {
                condition.add(filter.to_condition())
            })
    }
}

/// 並び替え可能な列
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortColumn {
    Score,
    Quarter,
    #[default]
    Year,
}

impl SortColumn {
    /// 不明な列名は `Year` とする
    pub fn parse_lenient(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("score") => Self::Score,
            Some("quarter") => Self::Quarter,
            _ => Self::Year,
        }
    }

    fn column(&self) -> skill_evaluation_model::Column {
        match self {
            Self::Score => skill_evaluation_model::Column::Score,
            Self::Quarter => skill_evaluation_model::Column::Quarter,
            Self::Year => skill_evaluation_model::Column::Year,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationSort {
    pub column: SortColumn,
    pub order: SortOrder,
}

impl EvaluationSort {
    pub fn parse_lenient(sort_by: Option<&str>, order: Option<&str>) -> Self {
        Self {
            column: SortColumn::parse_lenient(sort_by),
            order: SortOrder::parse_lenient(order),
        }
    }

    /// 指定列で並べ、同値は評価ID昇順で安定させる
    fn apply(&self, select: Select<EvaluationEntity>) -> Select<EvaluationEntity> {
        select
            .order_by(self.column.column(), Order::from(self.order))
            .order_by(skill_evaluation_model::Column::EvalId, Order::Asc)
    }
}

pub struct EvaluationRepository {
    db: DbConn,
}

impl EvaluationRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// 従業員・部署・スキルを結合した評価行の SELECT
    fn joined_rows() -> Select<EvaluationEntity> {
        EvaluationEntity::find()
            .select_only()
            .column(skill_evaluation_model::Column::EvalId)
            .column(employee_model::Column::EmpName)
            .column(department_model::Column::DeptName)
            .column(skill_model::Column::SkillName)
            .column(skill_evaluation_model::Column::SkillLevel)
            .column(skill_evaluation_model::Column::Score)
            .column(skill_evaluation_model::Column::MaxScore)
            .column(skill_evaluation_model::Column::Quarter)
            .column(skill_evaluation_model::Column::Year)
            .column(skill_evaluation_model::Column::Comment)
            .join(
                JoinType::InnerJoin,
                skill_evaluation_model::Relation::Employee.def(),
            )
            .join(
                JoinType::InnerJoin,
                employee_model::Relation::Department.def(),
            )
            .join(JoinType::InnerJoin, skill_evaluation_model::Relation::Skill.def())
    }

    /// 条件が空なら WHERE を付けず一覧と同じ SELECT になる
    fn filtered_rows(filters: &EvaluationFilterSet) -> Select<EvaluationEntity> {
        if filters.is_empty() {
            Self::joined_rows()
        } else {
            Self::joined_rows().filter(filters.to_condition())
        }
    }

    pub async fn find_by_id(
        &self,
        eval_id: i32,
    ) -> Result<Option<skill_evaluation_model::Model>, DbErr> {
        EvaluationEntity::find_by_id(eval_id).one(&self.db).await
    }

    /// ページ単位の一覧
    pub async fn find_page(
        &self,
        sort: EvaluationSort,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<EvaluationRow>, DbErr> {
        sort.apply(Self::joined_rows())
            .limit(limit)
            .offset(offset)
            .into_model::<EvaluationRow>()
            .all(&self.db)
            .await
    }

    /// 条件検索（ページングなし）
    pub async fn search(
        &self,
        filters: &EvaluationFilterSet,
        sort: EvaluationSort,
    ) -> Result<Vec<EvaluationRow>, DbErr> {
        sort.apply(Self::filtered_rows(filters))
            .into_model::<EvaluationRow>()
            .all(&self.db)
            .await
    }

    /// 評価の総数（条件なし）
    pub async fn count_all(&self) -> Result<u64, DbErr> {
        EvaluationEntity::find().count(&self.db).await
    }

    /// 評価が存在する年（昇順）
    pub async fn find_years(&self) -> Result<Vec<i32>, DbErr> {
        EvaluationEntity::find()
            .select_only()
            .column(skill_evaluation_model::Column::Year)
            .distinct()
            .order_by_asc(skill_evaluation_model::Column::Year)
            .into_tuple::<i32>()
            .all(&self.db)
            .await
    }

    pub async fn create(
        &self,
        active_model: EvaluationActiveModel,
    ) -> Result<skill_evaluation_model::Model, DbErr> {
        active_model.insert(&self.db).await
    }

    pub async fn update(
        &self,
        active_model: EvaluationActiveModel,
    ) -> Result<skill_evaluation_model::Model, DbErr> {
        active_model.update(&self.db).await
    }

    pub async fn delete_by_id(&self, eval_id: i32) -> Result<u64, DbErr> {
        let result = EvaluationEntity::delete_by_id(eval_id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}
