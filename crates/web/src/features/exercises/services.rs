use sqlx::SqlitePool;
use storage::{
    dto::{
        common::MessageResponse,
        exercise::{CreateExerciseRequest, UpdateExerciseRequest},
    },
    error::{Result, StorageError},
    models::Exercise,
    repository::{ExerciseRepository, WorkoutRepository},
};

/// Add an exercise to an existing workout
pub async fn create_exercise(
    pool: &SqlitePool,
    request: &CreateExerciseRequest,
) -> Result<Exercise> {
    let mut tx = pool.begin().await?;

    if !WorkoutRepository::new(&mut tx)
        .exists(request.workout_id)
        .await?
    {
        return Err(StorageError::NotFound("Workout"));
    }
    let exercise = ExerciseRepository::new(&mut tx).create(request).await?;

    tx.commit().await?;

    tracing::info!(
        exercise_id = exercise.id,
        workout_id = exercise.workout_id,
        "Created exercise"
    );
    Ok(exercise)
}

pub async fn get_exercise(pool: &SqlitePool, id: i64) -> Result<Exercise> {
    let mut conn = pool.acquire().await?;
    ExerciseRepository::new(&mut conn)
        .find_by_id(id)
        .await?
        .ok_or(StorageError::NotFound("Exercise"))
}

pub async fn update_exercise(
    pool: &SqlitePool,
    id: i64,
    request: &UpdateExerciseRequest,
) -> Result<Exercise> {
    let mut conn = pool.acquire().await?;
    let exercise = ExerciseRepository::new(&mut conn)
        .update(id, request)
        .await?
        .ok_or(StorageError::NotFound("Exercise"))?;

    tracing::info!(exercise_id = id, "Updated exercise");
    Ok(exercise)
}

pub async fn delete_exercise(pool: &SqlitePool, id: i64) -> Result<MessageResponse> {
    let mut conn = pool.acquire().await?;

    if !ExerciseRepository::new(&mut conn).delete(id).await? {
        return Err(StorageError::NotFound("Exercise"));
    }

    tracing::info!(exercise_id = id, "Deleted exercise");
    Ok(MessageResponse::new("Exercise deleted"))
}
