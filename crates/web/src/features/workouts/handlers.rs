use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::{
        common::MessageResponse,
        workout::{CreateWorkoutRequest, WorkoutDetailResponse},
    },
    models::{Exercise, Workout},
};

use crate::error::WebError;
use crate::extract::{ApiPath, ValidatedJson};
use crate::features::programs;

use super::services;

#[utoipa::path(
    post,
    path = "/workouts",
    request_body = CreateWorkoutRequest,
    responses(
        (status = 200, description = "Workout created", body = Workout),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Program not found")
    ),
    tag = "workouts"
)]
pub async fn create_workout(
    State(db): State<Database>,
    ValidatedJson(req): ValidatedJson<CreateWorkoutRequest>,
) -> Result<Response, WebError> {
    let workout = services::create_workout(db.pool(), &req).await?;

    Ok(Json(workout).into_response())
}

#[utoipa::path(
    get,
    path = "/workouts/{id}",
    params(
        ("id" = i64, Path, description = "Program id")
    ),
    responses(
        (status = 200, description = "Workouts of the program ordered by day number", body = Vec<Workout>),
        (status = 404, description = "Program not found")
    ),
    tag = "workouts"
)]
pub async fn list_program_days(
    State(db): State<Database>,
    ApiPath(program_id): ApiPath<i64>,
) -> Result<Response, WebError> {
    let workouts = programs::services::list_program_workouts(db.pool(), program_id).await?;

    Ok(Json(workouts).into_response())
}

#[utoipa::path(
    get,
    path = "/workouts/single/{id}",
    params(
        ("id" = i64, Path, description = "Workout id")
    ),
    responses(
        (status = 200, description = "Workout with its exercises", body = WorkoutDetailResponse),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn get_workout(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    let workout = services::get_workout_detailed(db.pool(), id).await?;

    Ok(Json(workout).into_response())
}

#[utoipa::path(
    get,
    path = "/workouts/{id}/exercises",
    params(
        ("id" = i64, Path, description = "Workout id")
    ),
    responses(
        (status = 200, description = "Exercises of the workout", body = Vec<Exercise>),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn list_workout_exercises(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    let exercises = services::list_workout_exercises(db.pool(), id).await?;

    Ok(Json(exercises).into_response())
}

#[utoipa::path(
    delete,
    path = "/workouts/{id}",
    params(
        ("id" = i64, Path, description = "Workout id")
    ),
    responses(
        (status = 200, description = "Workout deleted", body = MessageResponse),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn delete_workout(
    State(db): State<Database>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, WebError> {
    let message = services::delete_workout(db.pool(), id).await?;

    Ok(Json(message).into_response())
}
