use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260702_000002_branch::Branch;

static FK_SUBJECT_BRANCH_ID: &str = "fk-subject-branch_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Subject::Table)
                    .if_not_exists()
                    .col(pk_auto(Subject::Id))
                    .col(string_uniq(Subject::Code))
                    .col(string(Subject::Name))
                    .col(integer(Subject::BranchId))
                    .col(integer(Subject::TotalMarks))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_SUBJECT_BRANCH_ID)
                    .from_tbl(Subject::Table)
                    .from_col(Subject::BranchId)
                    .to_tbl(Branch::Table)
                    .to_col(Branch::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_SUBJECT_BRANCH_ID)
                    .table(Subject::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Subject::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Subject {
    Table,
    Id,
    Code,
    Name,
    BranchId,
    TotalMarks,
}
