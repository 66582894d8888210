use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::MessageResponse,
        program::{CreateProgramRequest, ProgramDetailResponse, ProgramFilter, UpdateProgramRequest},
    },
    models::{Workout, WorkoutProgram},
};

use crate::error::WebError;
use crate::extract::{ApiPath, ApiQuery, ValidatedJson};

use super::services;

#[utoipa::path(
    get,
    path = "/programs",
    params(ProgramFilter),
    responses(
        (status = 200, description = "Programs matching every given filter", body = Vec<WorkoutProgram>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "programs"
)]
pub async fn list_programs(
    State(db): State<Database>,
    ApiQuery(filter): ApiQuery<ProgramFilter>,
) -> Result<Response, WebError> {
    filter.validate().map_err(WebError::BadRequest)?;

    let programs = services::list_programs(db.pool(), &filter).await?;

    Ok(Json(programs).into_response())
}

#[utoipa::path(
    get,
    path = "/programs/{id}",
    params(
        ("id" = i64, Path, description = "Program id")
    ),
    responses(
        (status = 200, description = "Program with its workouts and exercises", body = ProgramDetailResponse),
        (status = 404, description = "Program not found")
    ),
    tag = "programs"
)]
pub async fn get_program(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    let program = services::get_program_detailed(db.pool(), id).await?;

    Ok(Json(program).into_response())
}

#[utoipa::path(
    post,
    path = "/programs",
    request_body = CreateProgramRequest,
    responses(
        (status = 200, description = "Program created", body = WorkoutProgram),
        (status = 400, description = "Validation error")
    ),
    tag = "programs"
)]
pub async fn create_program(
    State(db): State<Database>,
    ValidatedJson(req): ValidatedJson<CreateProgramRequest>,
) -> Result<Response, WebError> {
    let program = services::create_program(db.pool(), &req).await?;

    Ok(Json(program).into_response())
}

#[utoipa::path(
    put,
    path = "/programs/{id}",
    params(
        ("id" = i64, Path, description = "Program id")
    ),
    request_body = UpdateProgramRequest,
    responses(
        (status = 200, description = "Program updated", body = WorkoutProgram),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Program not found")
    ),
    tag = "programs"
)]
pub async fn update_program(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
    ValidatedJson(req): ValidatedJson<UpdateProgramRequest>,
) -> Result<Response, WebError> {
    let program = services::update_program(db.pool(), id, &req).await?;

    Ok(Json(program).into_response())
}

#[utoipa::path(
    delete,
    path = "/programs/{id}",
    params(
        ("id" = i64, Path, description = "Program id")
    ),
    responses(
        (status = 200, description = "Program and everything under it deleted", body = MessageResponse),
        (status = 400, description = "Dependent records block the delete"),
        (status = 404, description = "Program not found")
    ),
    tag = "programs"
)]
pub async fn delete_program(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    let message = services::delete_program(db.pool(), id).await?;

    Ok(Json(message).into_response())
}

#[utoipa::path(
    get,
    path = "/programs/{id}/workouts",
    params(
        ("id" = i64, Path, description = "Program id")
    ),
    responses(
        (status = 200, description = "Workouts ordered by day number", body = Vec<Workout>),
        (status = 404, description = "Program not found")
    ),
    tag = "programs"
)]
pub async fn list_program_workouts(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    let workouts = services::list_program_workouts(db.pool(), id).await?;

    Ok(Json(workouts).into_response())
}
