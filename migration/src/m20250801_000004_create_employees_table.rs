use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employees::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employees::EmpId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employees::EmpName).string_len(150).not_null())
                    .col(ColumnDef::new(Employees::DeptId).integer().not_null())
                    .col(
                        ColumnDef::new(Employees::DateJoined)
                            .date()
                            .not_null()
                            .default(Expr::current_date()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_employees_dept_id")
                    .from(Employees::Table, Employees::DeptId)
                    .to(Departments::Table, Departments::DeptId)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        // 名前検索 (ILIKE) とソート用
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Employees::Table)
                    .name("idx_employees_emp_name")
                    .col(Employees::EmpName)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .table(Employees::Table)
                    .name("idx_employees_dept_id")
                    .col(Employees::DeptId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(Employees::Table)
                    .name("idx_employees_dept_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .if_exists()
                    .table(Employees::Table)
                    .name("idx_employees_emp_name")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name("fk_employees_dept_id")
                    .table(Employees::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Employees::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Employees {
    Table,
    EmpId,
    EmpName,
    DeptId,
    DateJoined,
}

#[derive(DeriveIden)]
enum Departments {
    Table,
    DeptId,
}
