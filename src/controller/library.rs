use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    data::library::LibraryRepository,
    error::Error,
    model::{
        api::{BookIssueDto, ErrorDto, IssueBookDto, ReturnBookDto},
        app::AppState,
    },
    service::library::LibraryService,
};

pub static LIBRARY_TAG: &str = "library";

/// Issue a book to a student
#[utoipa::path(
    post,
    path = "/api/library/issues",
    tag = LIBRARY_TAG,
    request_body = IssueBookDto,
    responses(
        (status = 201, description = "Book issued", body = BookIssueDto),
        (status = 404, description = "Book not found", body = ErrorDto),
        (status = 409, description = "No copies available", body = ErrorDto),
    ),
)]
pub async fn issue_book(
    State(state): State<AppState>,
    Json(dto): Json<IssueBookDto>,
) -> Result<impl IntoResponse, Error> {
    let issue = LibraryService::new(&state.db)
        .issue_book(dto.student_id, dto.book_id, dto.issue_date, dto.due_date)
        .await?;

    Ok((StatusCode::CREATED, Json(BookIssueDto::from(issue))))
}

/// Return a previously issued book
#[utoipa::path(
    post,
    path = "/api/library/issues/{issue_id}/return",
    tag = LIBRARY_TAG,
    params(("issue_id" = i32, Path, description = "Issue record ID")),
    request_body = ReturnBookDto,
    responses(
        (status = 200, description = "Book returned", body = BookIssueDto),
        (status = 404, description = "Issue record not found", body = ErrorDto),
        (status = 409, description = "Issue already returned", body = ErrorDto),
    ),
)]
pub async fn return_book(
    State(state): State<AppState>,
    Path(issue_id): Path<i32>,
    Json(dto): Json<ReturnBookDto>,
) -> Result<impl IntoResponse, Error> {
    let issue = LibraryService::new(&state.db)
        .return_book(issue_id, dto.return_date)
        .await?;

    Ok(Json(BookIssueDto::from(issue)))
}

/// A student's issue history, most recent first
#[utoipa::path(
    get,
    path = "/api/students/{student_id}/issues",
    tag = LIBRARY_TAG,
    params(("student_id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "The student's issue records", body = Vec<BookIssueDto>),
    ),
)]
pub async fn student_issues(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let issues = LibraryRepository::new(&state.db)
        .issues_for_student(student_id)
        .await?;

    Ok(Json(
        issues.into_iter().map(BookIssueDto::from).collect::<Vec<_>>(),
    ))
}
