pub use sea_orm_migration::prelude::*;

mod m20260702_000001_batch;
mod m20260702_000002_branch;
mod m20260702_000003_admin;
mod m20260702_000004_student;
mod m20260702_000005_subject;
mod m20260702_000006_daily_attendance;
mod m20260702_000007_exam;
mod m20260702_000008_exam_mark;
mod m20260702_000009_library_book;
mod m20260702_000010_book_issue;
mod m20260702_000011_notice;
mod m20260702_000012_audit_log;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260702_000001_batch::Migration),
            Box::new(m20260702_000002_branch::Migration),
            Box::new(m20260702_000003_admin::Migration),
            Box::new(m20260702_000004_student::Migration),
            Box::new(m20260702_000005_subject::Migration),
            Box::new(m20260702_000006_daily_attendance::Migration),
            Box::new(m20260702_000007_exam::Migration),
            Box::new(m20260702_000008_exam_mark::Migration),
            Box::new(m20260702_000009_library_book::Migration),
            Box::new(m20260702_000010_book_issue::Migration),
            Box::new(m20260702_000011_notice::Migration),
            Box::new(m20260702_000012_audit_log::Migration),
        ]
    }
}
