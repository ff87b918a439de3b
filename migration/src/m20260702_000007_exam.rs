use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260702_000005_subject::Subject;

static FK_EXAM_SUBJECT_ID: &str = "fk-exam-subject_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Exam::Table)
                    .if_not_exists()
                    .col(pk_auto(Exam::Id))
                    .col(string(Exam::Name))
                    .col(integer(Exam::SubjectId))
                    .col(integer(Exam::TotalMarks))
                    .col(date(Exam::Date))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EXAM_SUBJECT_ID)
                    .from_tbl(Exam::Table)
                    .from_col(Exam::SubjectId)
                    .to_tbl(Subject::Table)
                    .to_col(Subject::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EXAM_SUBJECT_ID)
                    .table(Exam::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Exam::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Exam {
    Table,
    Id,
    Name,
    SubjectId,
    TotalMarks,
    Date,
}
