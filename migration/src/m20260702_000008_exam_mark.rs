use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260702_000004_student::Student, m20260702_000007_exam::Exam};

static FK_EXAM_MARK_EXAM_ID: &str = "fk-exam_mark-exam_id";
static FK_EXAM_MARK_STUDENT_ID: &str = "fk-exam_mark-student_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ExamMark::Table)
                    .if_not_exists()
                    .col(pk_auto(ExamMark::Id))
                    .col(integer(ExamMark::ExamId))
                    .col(integer(ExamMark::StudentId))
                    .col(integer(ExamMark::MarksObtained))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EXAM_MARK_EXAM_ID)
                    .from_tbl(ExamMark::Table)
                    .from_col(ExamMark::ExamId)
                    .to_tbl(Exam::Table)
                    .to_col(Exam::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EXAM_MARK_STUDENT_ID)
                    .from_tbl(ExamMark::Table)
                    .from_col(ExamMark::StudentId)
                    .to_tbl(Student::Table)
                    .to_col(Student::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EXAM_MARK_STUDENT_ID)
                    .table(ExamMark::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_EXAM_MARK_EXAM_ID)
                    .table(ExamMark::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ExamMark::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ExamMark {
    Table,
    Id,
    ExamId,
    StudentId,
    MarksObtained,
}
