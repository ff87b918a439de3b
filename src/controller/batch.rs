use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{api::DeletedDto, app::AppState},
    service::cascade::CascadeService,
};

pub static BATCH_TAG: &str = "batches";

/// Delete a batch together with every branch and dependent record it owns
#[utoipa::path(
    delete,
    path = "/api/batches/{batch_id}",
    tag = BATCH_TAG,
    params(("batch_id" = i32, Path, description = "Batch ID")),
    responses(
        (status = 200, description = "Whether the batch existed and was deleted", body = DeletedDto),
    ),
)]
pub async fn delete_batch(
    State(state): State<AppState>,
    Path(batch_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let deleted = CascadeService::new(&state.db).delete_batch(batch_id).await?;

    Ok(Json(DeletedDto { deleted }))
}

/// Delete a branch together with every dependent record it owns
#[utoipa::path(
    delete,
    path = "/api/branches/{branch_id}",
    tag = BATCH_TAG,
    params(("branch_id" = i32, Path, description = "Branch ID")),
    responses(
        (status = 200, description = "Whether the branch existed and was deleted", body = DeletedDto),
    ),
)]
pub async fn delete_branch(
    State(state): State<AppState>,
    Path(branch_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let deleted = CascadeService::new(&state.db)
        .delete_branch(branch_id)
        .await?;

    Ok(Json(DeletedDto { deleted }))
}
