//! Cascade deletion of batches and branches.
//!
//! A branch owns students, subjects, library books, and notices; those in
//! turn own attendance, marks, exams, and book issues. Deleting a branch
//! removes every dependent row in dependency order, inside one transaction.
//! The order is an explicit plan so it can be audited and unit-tested
//! without a database.

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    QueryFilter, QuerySelect, TransactionTrait,
};

use crate::{
    data::{batch::BatchRepository, branch::BranchRepository},
    error::Error,
};

/// One table-clearing step of the branch cascade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CascadeStep {
    BookIssues,
    AttendanceRecords,
    ExamMarks,
    Exams,
    Notices,
    Students,
    Subjects,
    LibraryBooks,
}

/// The dependency-ordered deletion plan for one branch.
///
/// Children of children go first: issue/attendance/mark rows reference a
/// student AND a book/subject/exam independently, so they are cleared by a
/// union filter before any of their referents. Exams are cleared between
/// marks and subjects because they hang off subjects.
pub fn branch_cascade_plan() -> &'static [CascadeStep] {
    use CascadeStep::*;

    &[
        BookIssues,
        AttendanceRecords,
        ExamMarks,
        Exams,
        Notices,
        Students,
        Subjects,
        LibraryBooks,
    ]
}

/// The ids a branch cascade touches, collected up front.
struct BranchScope {
    student_ids: Vec<i32>,
    subject_ids: Vec<i32>,
    book_ids: Vec<i32>,
    exam_ids: Vec<i32>,
}

impl BranchScope {
    async fn collect(txn: &DatabaseTransaction, branch_id: i32) -> Result<Self, DbErr> {
        let student_ids = entity::prelude::Student::find()
            .select_only()
            .column(entity::student::Column::Id)
            .filter(entity::student::Column::BranchId.eq(branch_id))
            .into_tuple::<i32>()
            .all(txn)
            .await?;

        let subject_ids = entity::prelude::Subject::find()
            .select_only()
            .column(entity::subject::Column::Id)
            .filter(entity::subject::Column::BranchId.eq(branch_id))
            .into_tuple::<i32>()
            .all(txn)
            .await?;

        let book_ids = entity::prelude::LibraryBook::find()
            .select_only()
            .column(entity::library_book::Column::Id)
            .filter(entity::library_book::Column::BranchId.eq(branch_id))
            .into_tuple::<i32>()
            .all(txn)
            .await?;

        let exam_ids = entity::prelude::Exam::find()
            .select_only()
            .column(entity::exam::Column::Id)
            .filter(entity::exam::Column::SubjectId.is_in(subject_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(txn)
            .await?;

        Ok(Self {
            student_ids,
            subject_ids,
            book_ids,
            exam_ids,
        })
    }
}

pub struct CascadeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CascadeService<'a> {
    /// Creates a new instance of [`CascadeService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deletes a branch and everything it owns, atomically.
    ///
    /// Returns `false` without side effects when the branch does not exist.
    pub async fn delete_branch(&self, branch_id: i32) -> Result<bool, Error> {
        if BranchRepository::new(self.db)
            .find_by_id(branch_id)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        let txn = self.db.begin().await?;

        cascade_branch(&txn, branch_id).await?;
        entity::prelude::Branch::delete_by_id(branch_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        tracing::info!(branch_id, "deleted branch with all dependent records");

        Ok(true)
    }

    /// Deletes a batch by cascading every branch it owns, then the batch
    /// row, all in one transaction.
    ///
    /// Returns `false` without side effects when the batch does not exist.
    pub async fn delete_batch(&self, batch_id: i32) -> Result<bool, Error> {
        if BatchRepository::new(self.db)
            .find_by_id(batch_id)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        let txn = self.db.begin().await?;

        let branch_ids = entity::prelude::Branch::find()
            .select_only()
            .column(entity::branch::Column::Id)
            .filter(entity::branch::Column::BatchId.eq(batch_id))
            .into_tuple::<i32>()
            .all(&txn)
            .await?;

        for branch_id in branch_ids {
            cascade_branch(&txn, branch_id).await?;
            entity::prelude::Branch::delete_by_id(branch_id)
                .exec(&txn)
                .await?;
        }

        entity::prelude::Batch::delete_by_id(batch_id)
            .exec(&txn)
            .await?;

        txn.commit().await?;

        tracing::info!(batch_id, "deleted batch with all dependent records");

        Ok(true)
    }
}

async fn cascade_branch(txn: &DatabaseTransaction, branch_id: i32) -> Result<(), DbErr> {
    let scope = BranchScope::collect(txn, branch_id).await?;

    for step in branch_cascade_plan() {
        execute_step(txn, *step, &scope, branch_id).await?;
    }

    Ok(())
}

async fn execute_step(
    txn: &DatabaseTransaction,
    step: CascadeStep,
    scope: &BranchScope,
    branch_id: i32,
) -> Result<(), DbErr> {
    match step {
        CascadeStep::BookIssues => {
            entity::prelude::BookIssue::delete_many()
                .filter(
                    Condition::any()
                        .add(
                            entity::book_issue::Column::StudentId
                                .is_in(scope.student_ids.iter().copied()),
                        )
                        .add(entity::book_issue::Column::BookId.is_in(scope.book_ids.iter().copied())),
                )
                .exec(txn)
                .await?;
        }
        CascadeStep::AttendanceRecords => {
            entity::prelude::DailyAttendance::delete_many()
                .filter(
                    Condition::any()
                        .add(
                            entity::daily_attendance::Column::StudentId
                                .is_in(scope.student_ids.iter().copied()),
                        )
                        .add(
                            entity::daily_attendance::Column::SubjectId
                                .is_in(scope.subject_ids.iter().copied()),
                        ),
                )
                .exec(txn)
                .await?;
        }
        CascadeStep::ExamMarks => {
            entity::prelude::ExamMark::delete_many()
                .filter(
                    Condition::any()
                        .add(
                            entity::exam_mark::Column::StudentId
                                .is_in(scope.student_ids.iter().copied()),
                        )
                        .add(entity::exam_mark::Column::ExamId.is_in(scope.exam_ids.iter().copied())),
                )
                .exec(txn)
                .await?;
        }
        CascadeStep::Exams => {
            entity::prelude::Exam::delete_many()
                .filter(entity::exam::Column::SubjectId.is_in(scope.subject_ids.iter().copied()))
                .exec(txn)
                .await?;
        }
        CascadeStep::Notices => {
            entity::prelude::Notice::delete_many()
                .filter(entity::notice::Column::BranchId.eq(branch_id))
                .exec(txn)
                .await?;
        }
        CascadeStep::Students => {
            entity::prelude::Student::delete_many()
                .filter(entity::student::Column::BranchId.eq(branch_id))
                .exec(txn)
                .await?;
        }
        CascadeStep::Subjects => {
            entity::prelude::Subject::delete_many()
                .filter(entity::subject::Column::BranchId.eq(branch_id))
                .exec(txn)
                .await?;
        }
        CascadeStep::LibraryBooks => {
            entity::prelude::LibraryBook::delete_many()
                .filter(entity::library_book::Column::BranchId.eq(branch_id))
                .exec(txn)
                .await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{branch_cascade_plan, CascadeStep};

    fn position(step: CascadeStep) -> usize {
        branch_cascade_plan()
            .iter()
            .position(|s| *s == step)
            .unwrap()
    }

    #[test]
    /// Every child table clears before the tables it references
    fn plan_clears_children_before_parents() {
        use CascadeStep::*;

        assert!(position(BookIssues) < position(Students));
        assert!(position(BookIssues) < position(LibraryBooks));
        assert!(position(AttendanceRecords) < position(Students));
        assert!(position(AttendanceRecords) < position(Subjects));
        assert!(position(ExamMarks) < position(Students));
        assert!(position(ExamMarks) < position(Exams));
        assert!(position(Exams) < position(Subjects));
    }

    #[test]
    fn plan_covers_every_step_exactly_once() {
        let plan = branch_cascade_plan();

        assert_eq!(plan.len(), 8);
        for step in plan {
            assert_eq!(plan.iter().filter(|s| *s == step).count(), 1);
        }
    }

    mod database {
        use chrono::NaiveDate;
        use registrar_test_utils::prelude::*;
        use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

        use crate::{
            data::library::ISSUE_STATUS_ISSUED,
            service::cascade::CascadeService,
        };

        struct Seeded {
            branch: entity::branch::Model,
            other_branch: entity::branch::Model,
            batch: entity::batch::Model,
        }

        fn day(d: u32) -> NaiveDate {
            NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
        }

        /// Two fully-populated branches under one batch
        async fn seed(db: &sea_orm::DatabaseConnection) -> Result<Seeded, TestError> {
            let batch = fixtures::insert_batch(db, "2024").await?;

            let mut branches = Vec::new();
            for (branch_name, roll_prefix) in [("Computer Science", "CS"), ("Mechanical", "ME")] {
                let branch = fixtures::insert_branch(db, batch.id, branch_name).await?;
                let student = fixtures::insert_student(
                    db,
                    branch.id,
                    &format!("{roll_prefix}-001"),
                    "Student",
                    "pw",
                )
                .await?;
                let subject = fixtures::insert_subject(
                    db,
                    branch.id,
                    &format!("{roll_prefix}101"),
                    "Subject",
                )
                .await?;
                let exam = fixtures::insert_exam(db, subject.id, "Midterm", 100, day(10)).await?;
                let book = fixtures::insert_book(db, branch.id, "Book", 2).await?;

                fixtures::insert_attendance(db, student.id, subject.id, day(2), "present").await?;
                fixtures::insert_exam_mark(db, exam.id, student.id, 80).await?;
                fixtures::insert_book_issue(db, student.id, book.id, day(5), ISSUE_STATUS_ISSUED)
                    .await?;
                fixtures::insert_notice(db, Some(branch.id), "Notice", "normal").await?;

                branches.push(branch);
            }

            let other_branch = branches.pop().unwrap();
            let branch = branches.pop().unwrap();

            Ok(Seeded {
                branch,
                other_branch,
                batch,
            })
        }

        async fn count_rows_for_branch(
            db: &sea_orm::DatabaseConnection,
            branch_id: i32,
        ) -> Result<u64, TestError> {
            let students = entity::prelude::Student::find()
                .filter(entity::student::Column::BranchId.eq(branch_id))
                .count(db)
                .await?;
            let subjects = entity::prelude::Subject::find()
                .filter(entity::subject::Column::BranchId.eq(branch_id))
                .count(db)
                .await?;
            let books = entity::prelude::LibraryBook::find()
                .filter(entity::library_book::Column::BranchId.eq(branch_id))
                .count(db)
                .await?;
            let notices = entity::prelude::Notice::find()
                .filter(entity::notice::Column::BranchId.eq(branch_id))
                .count(db)
                .await?;

            Ok(students + subjects + books + notices)
        }

        #[tokio::test]
        /// After a branch delete, no row owned by the branch remains and the
        /// sibling branch is untouched
        async fn branch_delete_removes_every_dependent_row() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let db = &test.state.db;
            let seeded = seed(db).await?;

            let deleted = CascadeService::new(db)
                .delete_branch(seeded.branch.id)
                .await
                .unwrap();

            assert!(deleted);
            assert_eq!(count_rows_for_branch(db, seeded.branch.id).await?, 0);
            assert!(entity::prelude::Branch::find_by_id(seeded.branch.id)
                .one(db)
                .await?
                .is_none());

            // Dependent tables hold only the sibling branch's rows now
            assert_eq!(entity::prelude::DailyAttendance::find().count(db).await?, 1);
            assert_eq!(entity::prelude::ExamMark::find().count(db).await?, 1);
            assert_eq!(entity::prelude::Exam::find().count(db).await?, 1);
            assert_eq!(entity::prelude::BookIssue::find().count(db).await?, 1);

            assert_eq!(count_rows_for_branch(db, seeded.other_branch.id).await?, 4);

            Ok(())
        }

        #[tokio::test]
        async fn batch_delete_cascades_every_branch() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let db = &test.state.db;
            let seeded = seed(db).await?;

            let deleted = CascadeService::new(db)
                .delete_batch(seeded.batch.id)
                .await
                .unwrap();

            assert!(deleted);
            assert!(entity::prelude::Batch::find_by_id(seeded.batch.id)
                .one(db)
                .await?
                .is_none());
            assert_eq!(entity::prelude::Branch::find().count(db).await?, 0);
            assert_eq!(entity::prelude::Student::find().count(db).await?, 0);
            assert_eq!(entity::prelude::DailyAttendance::find().count(db).await?, 0);
            assert_eq!(entity::prelude::BookIssue::find().count(db).await?, 0);

            Ok(())
        }

        #[tokio::test]
        async fn deleting_a_missing_target_returns_false() -> Result<(), TestError> {
            let test = test_setup_with_core_tables!()?;
            let service = CascadeService::new(&test.state.db);

            assert!(!service.delete_branch(404).await.unwrap());
            assert!(!service.delete_batch(404).await.unwrap());

            Ok(())
        }

        #[tokio::test]
        /// A failing step rolls the whole cascade back: with the book_issue
        /// table missing, the first plan step errors and nothing is deleted
        async fn failed_cascade_leaves_state_intact() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::Batch,
                entity::prelude::Branch,
                entity::prelude::Student,
                entity::prelude::Subject,
                entity::prelude::DailyAttendance,
                entity::prelude::Exam,
                entity::prelude::ExamMark,
                entity::prelude::LibraryBook,
                entity::prelude::Notice,
            )?;
            let db = &test.state.db;

            let batch = fixtures::insert_batch(db, "2024").await?;
            let branch = fixtures::insert_branch(db, batch.id, "Computer Science").await?;
            fixtures::insert_student(db, branch.id, "CS-001", "Ada", "pw").await?;
            fixtures::insert_notice(db, Some(branch.id), "Notice", "normal").await?;

            let result = CascadeService::new(db).delete_branch(branch.id).await;

            assert!(result.is_err());

            // Pre-delete state survives in full
            assert_eq!(count_rows_for_branch(db, branch.id).await?, 2);
            assert!(entity::prelude::Branch::find_by_id(branch.id)
                .one(db)
                .await?
                .is_some());

            Ok(())
        }
    }
}
