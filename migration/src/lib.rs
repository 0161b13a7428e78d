// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// マスタデータ
mod m20250801_000001_create_departments_table;
mod m20250801_000002_create_skill_categories_table;
mod m20250801_000003_create_skills_table;
mod m20250801_000004_create_employees_table;

// 評価データ
mod m20250801_000005_create_skill_evaluations_table;

// 認証
mod m20250801_000006_create_users_table;

// パフォーマンス用インデックス
mod m20250801_000007_add_evaluation_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250801_000001_create_departments_table::Migration),
            Box::new(m20250801_000002_create_skill_categories_table::Migration),
            Box::new(m20250801_000003_create_skills_table::Migration),
            Box::new(m20250801_000004_create_employees_table::Migration),
            Box::new(m20250801_000005_create_skill_evaluations_table::Migration),
            Box::new(m20250801_000006_create_users_table::Migration),
            Box::new(m20250801_000007_add_evaluation_indexes::Migration),
        ]
    }
}
