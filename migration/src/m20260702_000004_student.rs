use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260702_000002_branch::Branch;

static FK_STUDENT_BRANCH_ID: &str = "fk-student-branch_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Student::Table)
                    .if_not_exists()
                    .col(pk_auto(Student::Id))
                    .col(string_uniq(Student::RollNo))
                    .col(string(Student::Name))
                    .col(string(Student::PasswordHash))
                    .col(string_null(Student::Password))
                    .col(integer(Student::FailedLoginAttempts).default(0))
                    .col(timestamp_null(Student::LockoutUntil))
                    .col(integer(Student::BranchId))
                    .col(string_null(Student::SecurityQuestion))
                    .col(string_null(Student::SecurityAnswer))
                    .col(timestamp(Student::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_STUDENT_BRANCH_ID)
                    .from_tbl(Student::Table)
                    .from_col(Student::BranchId)
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
                    .name(FK_STUDENT_BRANCH_ID)
                    .table(Student::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Student::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Student {
    Table,
    Id,
    RollNo,
    Name,
    PasswordHash,
    Password,
    FailedLoginAttempts,
    LockoutUntil,
    BranchId,
    SecurityQuestion,
    SecurityAnswer,
    CreatedAt,
}
