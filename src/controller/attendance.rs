use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    data::attendance::{AttendanceRepository, ATTENDANCE_ABSENT, ATTENDANCE_PRESENT},
    error::Error,
    model::{
        api::{AttendanceRecordDto, ErrorDto, MarkAttendanceDto},
        app::AppState,
    },
};

pub static ATTENDANCE_TAG: &str = "attendance";

/// Record a student's attendance for a subject and date
///
/// Re-marking the same (student, subject, date) replaces the earlier record.
#[utoipa::path(
    post,
    path = "/api/attendance",
    tag = ATTENDANCE_TAG,
    request_body = MarkAttendanceDto,
    responses(
        (status = 201, description = "Attendance recorded", body = AttendanceRecordDto),
        (status = 400, description = "Unknown attendance status", body = ErrorDto),
    ),
)]
pub async fn mark_attendance(
    State(state): State<AppState>,
    Json(dto): Json<MarkAttendanceDto>,
) -> Result<impl IntoResponse, Error> {
    if dto.status != ATTENDANCE_PRESENT && dto.status != ATTENDANCE_ABSENT {
        return Err(Error::Validation(format!(
            "Attendance status must be \"present\" or \"absent\", got {:?}",
            dto.status
        )));
    }

    let record = AttendanceRepository::new(&state.db)
        .mark(dto.student_id, dto.subject_id, dto.date, &dto.status)
        .await?;

    Ok((StatusCode::CREATED, Json(AttendanceRecordDto::from(record))))
}
