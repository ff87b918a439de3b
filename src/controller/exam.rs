use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    data::exam::ExamRepository,
    error::Error,
    model::{
        api::{ErrorDto, ExamMarkDto, RecordMarkDto},
        app::AppState,
    },
};

pub static EXAM_TAG: &str = "exams";

/// Record a student's mark for an exam
///
/// A mark already recorded for the same (exam, student) is updated in place.
#[utoipa::path(
    post,
    path = "/api/exams/marks",
    tag = EXAM_TAG,
    request_body = RecordMarkDto,
    responses(
        (status = 201, description = "Mark recorded", body = ExamMarkDto),
        (status = 400, description = "Negative marks", body = ErrorDto),
    ),
)]
pub async fn record_mark(
    State(state): State<AppState>,
    Json(dto): Json<RecordMarkDto>,
) -> Result<impl IntoResponse, Error> {
    if dto.marks_obtained < 0 {
        return Err(Error::Validation(
            "Marks obtained cannot be negative".to_string(),
        ));
    }

    let mark = ExamRepository::new(&state.db)
        .upsert_mark(dto.exam_id, dto.student_id, dto.marks_obtained)
        .await?;

    Ok((StatusCode::CREATED, Json(ExamMarkDto::from(mark))))
}
