use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

pub const ISSUE_STATUS_ISSUED: &str = "issued";
pub const ISSUE_STATUS_RETURNED: &str = "returned";

pub struct LibraryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LibraryRepository<'a> {
    /// Creates a new instance of [`LibraryRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All issue records of one student, most recent first
    pub async fn issues_for_student(
        &self,
        student_id: i32,
    ) -> Result<Vec<entity::book_issue::Model>, DbErr> {
        entity::prelude::BookIssue::find()
            .filter(entity::book_issue::Column::StudentId.eq(student_id))
            .order_by_desc(entity::book_issue::Column::IssueDate)
            .all(self.db)
            .await
    }

    /// Count of outstanding (not yet returned) issues for a set of students
    pub async fn count_issued_for_students(&self, student_ids: &[i32]) -> Result<u64, DbErr> {
        entity::prelude::BookIssue::find()
            .filter(entity::book_issue::Column::Status.eq(ISSUE_STATUS_ISSUED))
            .filter(entity::book_issue::Column::StudentId.is_in(student_ids.iter().copied()))
            .count(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use registrar_test_utils::prelude::*;

    use crate::data::library::{LibraryRepository, ISSUE_STATUS_ISSUED, ISSUE_STATUS_RETURNED};

    async fn setup(
    ) -> Result<(TestSetup, entity::student::Model, entity::library_book::Model), TestError> {
        let test = test_setup_with_core_tables!()?;
        let db = &test.state.db;

        let batch = fixtures::insert_batch(db, "2024").await?;
        let branch = fixtures::insert_branch(db, batch.id, "Computer Science").await?;
        let student = fixtures::insert_student(db, branch.id, "CS-001", "Ada", "pw").await?;
        let book = fixtures::insert_book(db, branch.id, "SICP", 3).await?;

        Ok((test, student, book))
    }

    #[tokio::test]
    async fn lists_student_issues_most_recent_first() -> Result<(), TestError> {
        let (test, student, book) = setup().await?;
        let db = &test.state.db;

        let older = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        let newer = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        fixtures::insert_book_issue(db, student.id, book.id, older, ISSUE_STATUS_RETURNED).await?;
        fixtures::insert_book_issue(db, student.id, book.id, newer, ISSUE_STATUS_ISSUED).await?;

        let issues = LibraryRepository::new(db)
            .issues_for_student(student.id)
            .await?;

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].issue_date, newer);
        assert_eq!(issues[1].issue_date, older);

        Ok(())
    }

    #[tokio::test]
    /// Only issues still outstanding count toward the issued total
    async fn counts_only_outstanding_issues() -> Result<(), TestError> {
        let (test, student, book) = setup().await?;
        let db = &test.state.db;
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();

        fixtures::insert_book_issue(db, student.id, book.id, date, ISSUE_STATUS_ISSUED).await?;
        fixtures::insert_book_issue(db, student.id, book.id, date, ISSUE_STATUS_RETURNED).await?;

        let count = LibraryRepository::new(db)
            .count_issued_for_students(&[student.id])
            .await?;

        assert_eq!(count, 1);

        Ok(())
    }
}
