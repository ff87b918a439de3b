use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260702_000004_student::Student, m20260702_000005_subject::Subject};

static IDX_DAILY_ATTENDANCE_STUDENT_ID: &str = "idx-daily_attendance-student_id";
static FK_DAILY_ATTENDANCE_STUDENT_ID: &str = "fk-daily_attendance-student_id";
static FK_DAILY_ATTENDANCE_SUBJECT_ID: &str = "fk-daily_attendance-subject_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DailyAttendance::Table)
                    .if_not_exists()
                    .col(pk_auto(DailyAttendance::Id))
                    .col(integer(DailyAttendance::StudentId))
                    .col(integer(DailyAttendance::SubjectId))
                    .col(date(DailyAttendance::Date))
                    .col(string(DailyAttendance::Status))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DAILY_ATTENDANCE_STUDENT_ID)
                    .table(DailyAttendance::Table)
                    .col(DailyAttendance::StudentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DAILY_ATTENDANCE_STUDENT_ID)
                    .from_tbl(DailyAttendance::Table)
                    .from_col(DailyAttendance::StudentId)
                    .to_tbl(Student::Table)
                    .to_col(Student::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_DAILY_ATTENDANCE_SUBJECT_ID)
                    .from_tbl(DailyAttendance::Table)
                    .from_col(DailyAttendance::SubjectId)
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
                    .name(FK_DAILY_ATTENDANCE_SUBJECT_ID)
                    .table(DailyAttendance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_DAILY_ATTENDANCE_STUDENT_ID)
                    .table(DailyAttendance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DAILY_ATTENDANCE_STUDENT_ID)
                    .table(DailyAttendance::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(DailyAttendance::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum DailyAttendance {
    Table,
    Id,
    StudentId,
    SubjectId,
    Date,
    Status,
}
