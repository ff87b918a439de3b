//! End-to-end login scenario: registration, wrong-password attempts,
//! progressive lockout, lockout expiry.

use axum::{http::StatusCode, response::IntoResponse};
use chrono::{Duration, Utc};
use registrar_test_utils::prelude::*;
use sea_orm::{ActiveModelTrait, ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use registrar::{
    config::Config,
    error::Error,
    model::auth::{LoginCredentials, Role},
    service::{auth::login::LoginService, student::StudentService},
};

fn test_config() -> Config {
    Config {
        database_url: String::new(),
        bind_address: String::new(),
        maintenance_mode: false,
        lockout_threshold: 3,
        lockout_duration_minutes: 2,
    }
}

fn student_credentials(password: &str) -> LoginCredentials {
    LoginCredentials {
        username: "TEST-001".to_string(),
        password: password.to_string(),
        role: Role::Student,
    }
}

/// HTTP status and body message the error would surface as
async fn response_of(error: Error) -> (StatusCode, String) {
    let response = error.into_response();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let message = body["error"].as_str().unwrap_or_default().to_string();

    (status, message)
}

#[tokio::test]
async fn lockout_scenario_end_to_end() -> Result<(), TestError> {
    let test = test_setup_with_core_tables!()?;
    let db = &test.state.db;
    let config = test_config();

    let batch = fixtures::insert_batch(db, "2024").await?;
    let branch = fixtures::insert_branch(db, batch.id, "Computer Science").await?;

    // Student TEST-001 named "Test Student", created with name-as-password
    let created = StudentService::new(db)
        .create_student("TEST-001", "Test Student", "Test Student", branch.id)
        .await
        .unwrap();

    let service = LoginService::new(db, &config);

    // Correct login succeeds and returns the student's name
    let user = service
        .login(&student_credentials("Test Student"))
        .await
        .unwrap();
    assert_eq!(user.user_id, created.id);
    assert_eq!(user.name, "Test Student");

    // A wrong password is a 401 "Invalid password" with the remaining
    // attempts spelled out
    let wrong = service
        .login(&student_credentials("wrong password"))
        .await
        .unwrap_err();
    let (status, message) = response_of(wrong).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(message, "Invalid password, 2 attempts remaining");

    // The third consecutive wrong attempt locks the account: 403
    let _ = service.login(&student_credentials("wrong password")).await;
    let third = service
        .login(&student_credentials("wrong password"))
        .await
        .unwrap_err();
    let (status, message) = response_of(third).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert!(message.starts_with("Account locked"));

    // Even the correct password is rejected while locked: still 403
    let locked_out = service
        .login(&student_credentials("Test Student"))
        .await
        .unwrap_err();
    let (status, _) = response_of(locked_out).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Expire the lockout by setting it one second into the past
    let student = entity::prelude::Student::find()
        .filter(entity::student::Column::RollNo.eq("TEST-001"))
        .one(db)
        .await?
        .unwrap();
    let expired = entity::student::ActiveModel {
        id: ActiveValue::Unchanged(student.id),
        lockout_until: ActiveValue::Set(Some(Utc::now().naive_utc() - Duration::seconds(1))),
        ..Default::default()
    };
    expired.update(db).await?;

    // The correct password now succeeds and the failure state is reset
    let user = service
        .login(&student_credentials("Test Student"))
        .await
        .unwrap();
    assert_eq!(user.name, "Test Student");

    let student = entity::prelude::Student::find_by_id(student.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(student.failed_login_attempts, 0);
    assert!(student.lockout_until.is_none());

    Ok(())
}
