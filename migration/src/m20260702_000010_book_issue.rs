use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260702_000004_student::Student, m20260702_000009_library_book::LibraryBook};

static IDX_BOOK_ISSUE_STUDENT_ID: &str = "idx-book_issue-student_id";
static FK_BOOK_ISSUE_STUDENT_ID: &str = "fk-book_issue-student_id";
static FK_BOOK_ISSUE_BOOK_ID: &str = "fk-book_issue-book_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookIssue::Table)
                    .if_not_exists()
                    .col(pk_auto(BookIssue::Id))
                    .col(integer(BookIssue::StudentId))
                    .col(integer(BookIssue::BookId))
                    .col(date(BookIssue::IssueDate))
                    .col(date(BookIssue::DueDate))
                    .col(date_null(BookIssue::ReturnDate))
                    .col(string(BookIssue::Status))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BOOK_ISSUE_STUDENT_ID)
                    .table(BookIssue::Table)
                    .col(BookIssue::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOK_ISSUE_STUDENT_ID)
                    .from_tbl(BookIssue::Table)
                    .from_col(BookIssue::StudentId)
                    .to_tbl(Student::Table)
                    .to_col(Student::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_BOOK_ISSUE_BOOK_ID)
                    .from_tbl(BookIssue::Table)
                    .from_col(BookIssue::BookId)
                    .to_tbl(LibraryBook::Table)
                    .to_col(LibraryBook::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOOK_ISSUE_BOOK_ID)
                    .table(BookIssue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_BOOK_ISSUE_STUDENT_ID)
                    .table(BookIssue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BOOK_ISSUE_STUDENT_ID)
                    .table(BookIssue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(BookIssue::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BookIssue {
    Table,
    Id,
    StudentId,
    BookId,
    IssueDate,
    DueDate,
    ReturnDate,
    Status,
}
