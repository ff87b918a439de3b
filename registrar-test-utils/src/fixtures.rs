//! Fixture insert helpers for the batch -> branch -> student hierarchy and
//! its dependent records.
//!
//! Every helper writes directly through an `ActiveModel` so repositories and
//! services under test are never exercised while arranging test state.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Minimum bcrypt cost, to keep fixture creation fast. Test-only.
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn hash_password(raw: &str) -> String {
    bcrypt::hash(raw, TEST_BCRYPT_COST).expect("failed to hash test password")
}

pub async fn insert_batch(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::batch::Model, DbErr> {
    entity::batch::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        start_year: ActiveValue::Set(2024),
        end_year: ActiveValue::Set(2028),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_branch(
    db: &DatabaseConnection,
    batch_id: i32,
    name: &str,
) -> Result<entity::branch::Model, DbErr> {
    entity::branch::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        batch_id: ActiveValue::Set(batch_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a student whose stored hash matches `raw_password`.
pub async fn insert_student(
    db: &DatabaseConnection,
    branch_id: i32,
    roll_no: &str,
    name: &str,
    raw_password: &str,
) -> Result<entity::student::Model, DbErr> {
    entity::student::ActiveModel {
        roll_no: ActiveValue::Set(roll_no.to_string()),
        name: ActiveValue::Set(name.to_string()),
        password_hash: ActiveValue::Set(hash_password(raw_password)),
        password: ActiveValue::Set(None),
        failed_login_attempts: ActiveValue::Set(0),
        lockout_until: ActiveValue::Set(None),
        branch_id: ActiveValue::Set(branch_id),
        security_question: ActiveValue::Set(None),
        security_answer: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts a student seeded the legacy way: a plaintext `password` column and
/// a hash that matches nothing.
pub async fn insert_legacy_student(
    db: &DatabaseConnection,
    branch_id: i32,
    roll_no: &str,
    name: &str,
    plaintext_password: &str,
) -> Result<entity::student::Model, DbErr> {
    entity::student::ActiveModel {
        roll_no: ActiveValue::Set(roll_no.to_string()),
        name: ActiveValue::Set(name.to_string()),
        password_hash: ActiveValue::Set(hash_password("unrelated-seed-value")),
        password: ActiveValue::Set(Some(plaintext_password.to_string())),
        failed_login_attempts: ActiveValue::Set(0),
        lockout_until: ActiveValue::Set(None),
        branch_id: ActiveValue::Set(branch_id),
        security_question: ActiveValue::Set(None),
        security_answer: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_admin(
    db: &DatabaseConnection,
    name: &str,
    raw_password: &str,
    status: &str,
) -> Result<entity::admin::Model, DbErr> {
    entity::admin::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        password_hash: ActiveValue::Set(hash_password(raw_password)),
        role: ActiveValue::Set("admin".to_string()),
        status: ActiveValue::Set(status.to_string()),
        last_login: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_subject(
    db: &DatabaseConnection,
    branch_id: i32,
    code: &str,
    name: &str,
) -> Result<entity::subject::Model, DbErr> {
    entity::subject::ActiveModel {
        code: ActiveValue::Set(code.to_string()),
        name: ActiveValue::Set(name.to_string()),
        branch_id: ActiveValue::Set(branch_id),
        total_marks: ActiveValue::Set(100),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_attendance(
    db: &DatabaseConnection,
    student_id: i32,
    subject_id: i32,
    date: NaiveDate,
    status: &str,
) -> Result<entity::daily_attendance::Model, DbErr> {
    entity::daily_attendance::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        subject_id: ActiveValue::Set(subject_id),
        date: ActiveValue::Set(date),
        status: ActiveValue::Set(status.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_exam(
    db: &DatabaseConnection,
    subject_id: i32,
    name: &str,
    total_marks: i32,
    date: NaiveDate,
) -> Result<entity::exam::Model, DbErr> {
    entity::exam::ActiveModel {
        name: ActiveValue::Set(name.to_string()),
        subject_id: ActiveValue::Set(subject_id),
        total_marks: ActiveValue::Set(total_marks),
        date: ActiveValue::Set(date),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_exam_mark(
    db: &DatabaseConnection,
    exam_id: i32,
    student_id: i32,
    marks_obtained: i32,
) -> Result<entity::exam_mark::Model, DbErr> {
    entity::exam_mark::ActiveModel {
        exam_id: ActiveValue::Set(exam_id),
        student_id: ActiveValue::Set(student_id),
        marks_obtained: ActiveValue::Set(marks_obtained),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_book(
    db: &DatabaseConnection,
    branch_id: i32,
    title: &str,
    copies: i32,
) -> Result<entity::library_book::Model, DbErr> {
    entity::library_book::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        author: ActiveValue::Set("Test Author".to_string()),
        total_copies: ActiveValue::Set(copies),
        copies_available: ActiveValue::Set(copies),
        branch_id: ActiveValue::Set(branch_id),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_book_issue(
    db: &DatabaseConnection,
    student_id: i32,
    book_id: i32,
    issue_date: NaiveDate,
    status: &str,
) -> Result<entity::book_issue::Model, DbErr> {
    entity::book_issue::ActiveModel {
        student_id: ActiveValue::Set(student_id),
        book_id: ActiveValue::Set(book_id),
        issue_date: ActiveValue::Set(issue_date),
        due_date: ActiveValue::Set(issue_date + chrono::Duration::days(14)),
        return_date: ActiveValue::Set(None),
        status: ActiveValue::Set(status.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}

pub async fn insert_notice(
    db: &DatabaseConnection,
    branch_id: Option<i32>,
    title: &str,
    priority: &str,
) -> Result<entity::notice::Model, DbErr> {
    entity::notice::ActiveModel {
        title: ActiveValue::Set(title.to_string()),
        message: ActiveValue::Set("Test notice message".to_string()),
        priority: ActiveValue::Set(priority.to_string()),
        branch_id: ActiveValue::Set(branch_id),
        created_at: ActiveValue::Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
}
