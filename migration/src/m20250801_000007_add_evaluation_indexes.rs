use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 従業員ごとの成長曲線・検索用
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(SkillEvaluations::Table)
                    .name("idx_skill_evaluations_emp_id")
                    .col(SkillEvaluations::EmpId)
                    .to_owned(),
            )
            .await?;

        // スキル最大スコア変更時の一括更新用
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(SkillEvaluations::Table)
                    .name("idx_skill_evaluations_skill_id")
                    .col(SkillEvaluations::SkillId)
                    .to_owned(),
            )
            .await?;

        // 四半期別集計・時系列ソート用
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(SkillEvaluations::Table)
                    .name("idx_skill_evaluations_year_quarter")
                    .col(SkillEvaluations::Year)
                    .col(SkillEvaluations::Quarter)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(SkillEvaluations::Table)
                    .name("idx_skill_evaluations_skill_level")
                    .col(SkillEvaluations::SkillLevel)
                    .to_owned(),
            )
            .await?;

        // トップパフォーマー用
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(SkillEvaluations::Table)
                    .name("idx_skill_evaluations_score")
                    .col(SkillEvaluations::Score)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for name in [
            "idx_skill_evaluations_score",
            "idx_skill_evaluations_skill_level",
            "idx_skill_evaluations_year_quarter",
            "idx_skill_evaluations_skill_id",
            "idx_skill_evaluations_emp_id",
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .if_exists()
                        .table(SkillEvaluations::Table)
                        .name(name)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SkillEvaluations {
    Table,
    EmpId,
    SkillId,
    Year,
    Quarter,
    SkillLevel,
    Score,
}
