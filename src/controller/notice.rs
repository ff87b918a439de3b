use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    data::notice::NoticeRepository,
    error::Error,
    model::{
        api::{NoticeDto, NoticeParams},
        app::AppState,
    },
};

pub static NOTICE_TAG: &str = "notices";

/// Notices visible to a branch (its own plus global), high priority first
#[utoipa::path(
    get,
    path = "/api/notices",
    tag = NOTICE_TAG,
    params(NoticeParams),
    responses(
        (status = 200, description = "Visible notices", body = Vec<NoticeDto>),
    ),
)]
pub async fn list_notices(
    State(state): State<AppState>,
    Query(params): Query<NoticeParams>,
) -> Result<impl IntoResponse, Error> {
    let notices = NoticeRepository::new(&state.db)
        .list_for_branch(params.branch_id)
        .await?;

    Ok(Json(
        notices.into_iter().map(NoticeDto::from).collect::<Vec<_>>(),
    ))
}
