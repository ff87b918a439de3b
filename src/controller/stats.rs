use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::{
            AttendanceSummaryDto, GlobalStatsDto, MarkSummaryDto, StatsScopeParams,
            SubjectStatsDto,
        },
        app::AppState,
    },
    service::stats::StatsService,
};

pub static STATS_TAG: &str = "stats";

/// Dashboard summary statistics, optionally scoped by branch or batch
#[utoipa::path(
    get,
    path = "/api/stats",
    tag = STATS_TAG,
    params(StatsScopeParams),
    responses(
        (status = 200, description = "Summary statistics for the scope", body = GlobalStatsDto),
    ),
)]
pub async fn global_stats(
    State(state): State<AppState>,
    Query(scope): Query<StatsScopeParams>,
) -> Result<impl IntoResponse, Error> {
    let stats = StatsService::new(&state.db).global_stats(&scope).await?;

    Ok(Json(stats))
}

/// Per-subject statistics, optionally scoped by branch or batch
#[utoipa::path(
    get,
    path = "/api/stats/subjects",
    tag = STATS_TAG,
    params(StatsScopeParams),
    responses(
        (status = 200, description = "Per-subject statistics for the scope", body = Vec<SubjectStatsDto>),
    ),
)]
pub async fn subject_stats(
    State(state): State<AppState>,
    Query(scope): Query<StatsScopeParams>,
) -> Result<impl IntoResponse, Error> {
    let stats = StatsService::new(&state.db).subject_stats(&scope).await?;

    Ok(Json(stats))
}

/// A student's per-(subject, month) attendance summaries
#[utoipa::path(
    get,
    path = "/api/students/{student_id}/attendance",
    tag = STATS_TAG,
    params(("student_id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Attendance summaries", body = Vec<AttendanceSummaryDto>),
    ),
)]
pub async fn student_attendance(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let summaries = StatsService::new(&state.db)
        .student_attendance(student_id)
        .await?;

    Ok(Json(summaries))
}

/// A student's per-exam mark summaries
#[utoipa::path(
    get,
    path = "/api/students/{student_id}/marks",
    tag = STATS_TAG,
    params(("student_id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Mark summaries", body = Vec<MarkSummaryDto>),
    ),
)]
pub async fn student_marks(
    State(state): State<AppState>,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let summaries = StatsService::new(&state.db).student_marks(student_id).await?;

    Ok(Json(summaries))
}
