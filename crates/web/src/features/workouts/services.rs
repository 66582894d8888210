use sqlx::SqlitePool;
use storage::{
    dto::{
        common::MessageResponse,
        workout::{CreateWorkoutRequest, WorkoutDetailResponse},
    },
    error::{Result, StorageError},
    models::{Exercise, Workout},
    repository::{ExerciseRepository, ProgramRepository, WorkoutRepository},
};

/// Add a day to an existing program
pub async fn create_workout(pool: &SqlitePool, request: &CreateWorkoutRequest) -> Result<Workout> {
    let mut tx = pool.begin().await?;

    if !ProgramRepository::new(&mut tx)
        .exists(request.program_id)
        .await?
    {
        return Err(StorageError::NotFound("Program"));
    }
    let workout = WorkoutRepository::new(&mut tx).create(request).await?;

    tx.commit().await?;

    tracing::info!(
        workout_id = workout.id,
        program_id = workout.program_id,
        day_number = workout.day_number,
        "Created workout"
    );
    Ok(workout)
}

/// Get a workout with its exercises
pub async fn get_workout_detailed(pool: &SqlitePool, id: i64) -> Result<WorkoutDetailResponse> {
    let mut conn = pool.acquire().await?;

    let workout = WorkoutRepository::new(&mut conn)
        .find_by_id(id)
        .await?
        .ok_or(StorageError::NotFound("Workout"))?;
    let exercises = ExerciseRepository::new(&mut conn)
        .list_by_workout(id)
        .await?;

    Ok(WorkoutDetailResponse::new(workout, exercises))
}

/// List the exercises of a workout
pub async fn list_workout_exercises(pool: &SqlitePool, id: i64) -> Result<Vec<Exercise>> {
    let mut conn = pool.acquire().await?;

    if !WorkoutRepository::new(&mut conn).exists(id).await? {
        return Err(StorageError::NotFound("Workout"));
    }

    ExerciseRepository::new(&mut conn).list_by_workout(id).await
}

/// Delete a workout with its exercises and progress records
pub async fn delete_workout(pool: &SqlitePool, id: i64) -> Result<MessageResponse> {
    let mut tx = pool.begin().await?;

    if !WorkoutRepository::new(&mut tx).delete(id).await? {
        return Err(StorageError::NotFound("Workout"));
    }

    tx.commit().await?;

    tracing::info!(workout_id = id, "Deleted workout");
    Ok(MessageResponse::new("Workout deleted"))
}
