use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::MessageResponse,
        exercise::{CreateExerciseRequest, UpdateExerciseRequest},
    },
    models::Exercise,
};

use crate::error::WebError;
use crate::extract::{ApiPath, ValidatedJson};

use super::services;

#[utoipa::path(
    post,
    path = "/exercises",
    request_body = CreateExerciseRequest,
    responses(
        (status = 200, description = "Exercise created", body = Exercise),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Workout not found")
    ),
    tag = "exercises"
)]
pub async fn create_exercise(
    State(db): State<Database>,
    ValidatedJson(req): ValidatedJson<CreateExerciseRequest>,
) -> Result<Response, WebError> {
    let exercise = services::create_exercise(db.pool(), &req).await?;

    Ok(Json(exercise).into_response())
}

#[utoipa::path(
    get,
    path = "/exercises/{id}",
    params(
        ("id" = i64, Path, description = "Exercise id")
    ),
    responses(
        (status = 200, description = "Exercise found", body = Exercise),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercises"
)]
pub async fn get_exercise(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    let exercise = services::get_exercise(db.pool(), id).await?;

    Ok(Json(exercise).into_response())
}

#[utoipa::path(
    put,
    path = "/exercises/{id}",
    params(
        ("id" = i64, Path, description = "Exercise id")
    ),
    request_body = UpdateExerciseRequest,
    responses(
        (status = 200, description = "Exercise updated", body = Exercise),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercises"
)]
pub async fn update_exercise(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(req): ValidatedJson<UpdateExerciseRequest>,
) -> Result<Response, WebError> {
    let exercise = services::update_exercise(db.pool(), id, &req).await?;

    Ok(Json(exercise).into_response())
}

#[utoipa::path(
    delete,
    path = "/exercises/{id}",
    params(
        ("id" = i64, Path, description = "Exercise id")
    ),
    responses(
        (status = 200, description = "Exercise deleted", body = MessageResponse),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercises"
)]
pub async fn delete_exercise(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    let message = services::delete_exercise(db.pool(), id).await?;

    Ok(Json(message).into_response())
}
