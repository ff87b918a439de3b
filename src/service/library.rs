//! Library book circulation.
//!
//! Issue and return run inside one transaction each, holding a row lock
//! (`SELECT ... FOR UPDATE`) on the book row (and, for return, the issue
//! row) for the whole read-check-write sequence. `copies_available` is only
//! ever written here, from the locked read, so N concurrent issues of a book
//! with C copies succeed at most C times.

use chrono::NaiveDate;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QuerySelect, TransactionTrait,
};

use crate::{
    data::library::{ISSUE_STATUS_ISSUED, ISSUE_STATUS_RETURNED},
    error::{library::LibraryError, Error},
};

pub struct LibraryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LibraryService<'a> {
    /// Creates a new instance of [`LibraryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a book to a student, decrementing the availability counter.
    pub async fn issue_book(
        &self,
        student_id: i32,
        book_id: i32,
        issue_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Result<entity::book_issue::Model, Error> {
        let txn = self.db.begin().await?;

        let book = entity::prelude::LibraryBook::find_by_id(book_id)
            .lock_exclusive()
            .one(&txn)
            .await?;

        let Some(book) = book else {
            txn.rollback().await?;
            return Err(LibraryError::BookNotFound(book_id).into());
        };

        if book.copies_available <= 0 {
            txn.rollback().await?;
            return Err(LibraryError::NoCopiesAvailable(book_id).into());
        }

        let issue = entity::book_issue::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            book_id: ActiveValue::Set(book_id),
            issue_date: ActiveValue::Set(issue_date),
            due_date: ActiveValue::Set(due_date),
            return_date: ActiveValue::Set(None),
            status: ActiveValue::Set(ISSUE_STATUS_ISSUED.to_string()),
            ..Default::default()
        };
        let issue = issue.insert(&txn).await?;

        // Decrement from the locked value, never from a stale read
        let copies_available = book.copies_available - 1;
        let mut book: entity::library_book::ActiveModel = book.into();
        book.copies_available = ActiveValue::Set(copies_available);
        book.update(&txn).await?;

        txn.commit().await?;

        Ok(issue)
    }

    /// Marks an issue returned, incrementing the availability counter.
    ///
    /// Returning an already-returned issue is an error, not a no-op.
    pub async fn return_book(
        &self,
        issue_id: i32,
        return_date: NaiveDate,
    ) -> Result<entity::book_issue::Model, Error> {
        let txn = self.db.begin().await?;

        let issue = entity::prelude::BookIssue::find_by_id(issue_id)
            .lock_exclusive()
            .one(&txn)
            .await?;

        let Some(issue) = issue else {
            txn.rollback().await?;
            return Err(LibraryError::IssueNotFound(issue_id).into());
        };

        if issue.status == ISSUE_STATUS_RETURNED {
            txn.rollback().await?;
            return Err(LibraryError::AlreadyReturned(issue_id).into());
        }

        let book = entity::prelude::LibraryBook::find_by_id(issue.book_id)
            .lock_exclusive()
            .one(&txn)
            .await?;

        let Some(book) = book else {
            txn.rollback().await?;
            return Err(LibraryError::BookNotFound(issue.book_id).into());
        };

        let mut updated: entity::book_issue::ActiveModel = issue.into();
        updated.status = ActiveValue::Set(ISSUE_STATUS_RETURNED.to_string());
        updated.return_date = ActiveValue::Set(Some(return_date));
        let issue = updated.update(&txn).await?;

        let copies_available = book.copies_available + 1;
        let mut book: entity::library_book::ActiveModel = book.into();
        book.copies_available = ActiveValue::Set(copies_available);
        book.update(&txn).await?;

        txn.commit().await?;

        Ok(issue)
    }
}
