//! Concurrency bound on the library availability counter.

use chrono::NaiveDate;
use registrar_test_utils::prelude::*;
use sea_orm::EntityTrait;

use registrar::{
    error::{library::LibraryError, Error},
    service::library::LibraryService,
};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

#[tokio::test]
/// With 2 copies and 3 overlapping issue requests, exactly 2 succeed, the
/// third sees NoCopiesAvailable, and the counter lands on 0
async fn concurrent_issues_never_exceed_available_copies() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let db = &test.state.db;

    let batch = fixtures::insert_batch(db, "2024").await?;
    let branch = fixtures::insert_branch(db, batch.id, "Computer Science").await?;
    let student = fixtures::insert_student(db, branch.id, "CS-001", "Ada", "pw").await?;
    let book = fixtures::insert_book(db, branch.id, "SICP", 2).await?;

    let service = LibraryService::new(db);

    let (first, second, third) = tokio::join!(
        service.issue_book(student.id, book.id, day(2), day(16)),
        service.issue_book(student.id, book.id, day(2), day(16)),
        service.issue_book(student.id, book.id, day(2), day(16)),
    );

    let results = [first, second, third];
    let successes = results.iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 2);

    for result in results.iter().filter(|r| r.is_err()) {
        assert!(matches!(
            result,
            Err(Error::LibraryError(LibraryError::NoCopiesAvailable(_)))
        ));
    }

    let book = entity::prelude::LibraryBook::find_by_id(book.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(book.copies_available, 0);

    let issues = entity::prelude::BookIssue::find().all(db).await?;
    assert_eq!(issues.len(), 2);

    Ok(())
}

#[tokio::test]
/// Issue-then-return round trips restore availability exactly once
async fn return_after_concurrent_issues_restores_one_copy() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let db = &test.state.db;

    let batch = fixtures::insert_batch(db, "2024").await?;
    let branch = fixtures::insert_branch(db, batch.id, "Computer Science").await?;
    let student = fixtures::insert_student(db, branch.id, "CS-001", "Ada", "pw").await?;
    let book = fixtures::insert_book(db, branch.id, "SICP", 1).await?;

    let service = LibraryService::new(db);

    let issue = service
        .issue_book(student.id, book.id, day(2), day(16))
        .await
        .unwrap();

    // Overlapping double return: exactly one succeeds
    let (first, second) = tokio::join!(
        service.return_book(issue.id, day(10)),
        service.return_book(issue.id, day(10)),
    );
    assert_eq!([&first, &second].iter().filter(|r| r.is_ok()).count(), 1);

    let book = entity::prelude::LibraryBook::find_by_id(book.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(book.copies_available, 1);

    Ok(())
}
