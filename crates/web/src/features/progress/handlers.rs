use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::progress::{CompletionStatusRequest, CreateProgressRequest},
    models::UserProgress,
};

use crate::error::WebError;
use crate::extract::{ApiPath, ValidatedJson};

use super::services;

#[utoipa::path(
    post,
    path = "/progress",
    request_body = CreateProgressRequest,
    responses(
        (status = 200, description = "Progress record created", body = UserProgress),
        (status = 400, description = "Invalid body"),
        (status = 404, description = "User, program or workout not found")
    ),
    tag = "progress"
)]
pub async fn create_progress(
    State(db): State<Database>,
    ValidatedJson(req): ValidatedJson<CreateProgressRequest>,
) -> Result<Response, WebError> {
    let progress = services::create_progress(db.pool(), &req).await?;

    Ok(Json(progress).into_response())
}

#[utoipa::path(
    get,
    path = "/progress/{id}",
    params(
        ("id" = i64, Path, description = "Progress record id")
    ),
    responses(
        (status = 200, description = "Progress record found", body = UserProgress),
        (status = 404, description = "Progress not found")
    ),
    tag = "progress"
)]
pub async fn get_progress(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    let progress = services::get_progress(db.pool(), id).await?;

    Ok(Json(progress).into_response())
}

#[utoipa::path(
    patch,
    path = "/progress/{id}/complete",
    params(
        ("id" = i64, Path, description = "Progress record id")
    ),
    request_body = CompletionStatusRequest,
    responses(
        (status = 200, description = "Completion status updated", body = UserProgress),
        (status = 400, description = "Invalid body"),
        (status = 404, description = "Progress not found")
    ),
    tag = "progress"
)]
pub async fn complete_workout(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(status): ValidatedJson<CompletionStatusRequest>,
) -> Result<Response, WebError> {
    let progress = services::set_completion(db.pool(), id, status.is_completed).await?;

    Ok(Json(progress).into_response())
}
