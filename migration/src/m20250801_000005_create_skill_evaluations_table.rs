use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SkillEvaluations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SkillEvaluations::EvalId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SkillEvaluations::EmpId).integer().not_null())
                    .col(
                        ColumnDef::new(SkillEvaluations::SkillId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SkillEvaluations::Score).double().not_null())
                    .col(
                        ColumnDef::new(SkillEvaluations::MaxScore)
                            .double()
                            .not_null()
                            .default(10.0),
                    )
                    .col(
                        ColumnDef::new(SkillEvaluations::Quarter)
                            .string_len(2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(SkillEvaluations::Year).integer().not_null())
                    .col(ColumnDef::new(SkillEvaluations::Comment).text().null())
                    .col(
                        ColumnDef::new(SkillEvaluations::SkillLevel)
                            .string_len(20)
                            .null(),
                    )
                    .check(Expr::col(SkillEvaluations::Quarter).is_in(["Q1", "Q2", "Q3", "Q4"]))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_skill_evaluations_emp_id")
                    .from(SkillEvaluations::Table, SkillEvaluations::EmpId)
                    .to(Employees::Table, Employees::EmpId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_skill_evaluations_skill_id")
                    .from(SkillEvaluations::Table, SkillEvaluations::SkillId)
                    .to(Skills::Table, Skills::SkillId)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name("fk_skill_evaluations_skill_id")
                    .table(SkillEvaluations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name("fk_skill_evaluations_emp_id")
                    .table(SkillEvaluations::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SkillEvaluations::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SkillEvaluations {
    Table,
    EvalId,
    EmpId,
    SkillId,
    Score,
    MaxScore,
    Quarter,
    Year,
    Comment,
    SkillLevel,
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    EmpId,
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    SkillId,
}
