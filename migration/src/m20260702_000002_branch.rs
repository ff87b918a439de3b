use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260702_000001_batch::Batch;

static FK_BRANCH_BATCH_ID: &str = "fk-branch-batch_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Branch::Table)
                    .if_not_exists()
                    .col(pk_auto(Branch::Id))
                    .col(string(Branch::Name))
                    .col(integer(Branch::BatchId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BRANCH_BATCH_ID)
                    .from_tbl(Branch::Table)
                    .from_col(Branch::BatchId)
                    .to_tbl(Batch::Table)
                    .to_col(Batch::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BRANCH_BATCH_ID)
                    .table(Branch::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Branch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Branch {
    Table,
    Id,
    Name,
    BatchId,
}
