use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::SkillId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Skills::SkillName)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Skills::CategoryId).integer().null())
                    .col(
                        ColumnDef::new(Skills::MaxScore)
                            .double()
                            .not_null()
                            .default(10.0),
                    )
                    .to_owned(),
            )
            .await?;

        // カテゴリ削除時はスキルを未分類に戻す
        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_skills_category_id")
                    .from(Skills::Table, Skills::CategoryId)
                    .to(SkillCategories::Table, SkillCategories::CategoryId)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name("fk_skills_category_id")
                    .table(Skills::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    SkillId,
    SkillName,
    CategoryId,
    MaxScore,
}

#[derive(DeriveIden)]
enum SkillCategories {
    Table,
    CategoryId,
}
