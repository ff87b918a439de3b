use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260702_000002_branch::Branch;

static FK_LIBRARY_BOOK_BRANCH_ID: &str = "fk-library_book-branch_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LibraryBook::Table)
                    .if_not_exists()
                    .col(pk_auto(LibraryBook::Id))
                    .col(string(LibraryBook::Title))
                    .col(string(LibraryBook::Author))
                    .col(integer(LibraryBook::TotalCopies))
                    .col(integer(LibraryBook::CopiesAvailable))
                    .col(integer(LibraryBook::BranchId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LIBRARY_BOOK_BRANCH_ID)
                    .from_tbl(LibraryBook::Table)
                    .from_col(LibraryBook::BranchId)
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
                    .name(FK_LIBRARY_BOOK_BRANCH_ID)
                    .table(LibraryBook::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(LibraryBook::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LibraryBook {
    Table,
    Id,
    Title,
    Author,
    TotalCopies,
    CopiesAvailable,
    BranchId,
}
