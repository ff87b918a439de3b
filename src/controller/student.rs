use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, RegisterStudentDto, StudentDto},
        app::AppState,
    },
    service::student::StudentService,
};

pub static STUDENT_TAG: &str = "students";

/// Register a new student
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = RegisterStudentDto,
    responses(
        (status = 201, description = "Student created", body = StudentDto),
        (status = 400, description = "Malformed roll number", body = ErrorDto),
        (status = 409, description = "Roll number already exists", body = ErrorDto),
    ),
)]
pub async fn register_student(
    State(state): State<AppState>,
    Json(dto): Json<RegisterStudentDto>,
) -> Result<impl IntoResponse, Error> {
    let student = StudentService::new(&state.db)
        .create_student(&dto.roll_no, &dto.name, &dto.password, dto.branch_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(StudentDto {
            id: student.id,
            roll_no: student.roll_no,
            name: student.name,
            branch_id: student.branch_id,
        }),
    ))
}
