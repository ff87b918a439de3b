use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260702_000002_branch::Branch;

static FK_NOTICE_BRANCH_ID: &str = "fk-notice-branch_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Notice::Table)
                    .if_not_exists()
                    .col(pk_auto(Notice::Id))
                    .col(string(Notice::Title))
                    .col(string(Notice::Message))
                    .col(string(Notice::Priority))
                    .col(integer_null(Notice::BranchId))
                    .col(timestamp(Notice::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_NOTICE_BRANCH_ID)
                    .from_tbl(Notice::Table)
                    .from_col(Notice::BranchId)
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
                    .name(FK_NOTICE_BRANCH_ID)
                    .table(Notice::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Notice::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Notice {
    Table,
    Id,
    Title,
    Message,
    Priority,
    BranchId,
    CreatedAt,
}
