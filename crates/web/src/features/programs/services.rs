use std::collections::HashMap;

use sqlx::SqlitePool;
use storage::{
    dto::{
        common::MessageResponse,
        program::{CreateProgramRequest, ProgramDetailResponse, ProgramFilter, UpdateProgramRequest},
        workout::WorkoutDetailResponse,
    },
    error::{Result, StorageError},
    models::{Exercise, Workout, WorkoutProgram},
    repository::{ExerciseRepository, ProgramRepository, WorkoutRepository},
};

/// List programs matching the filter
pub async fn list_programs(pool: &SqlitePool, filter: &ProgramFilter) -> Result<Vec<WorkoutProgram>> {
    let mut conn = pool.acquire().await?;
    ProgramRepository::new(&mut conn).list(filter).await
}

/// Get a program with its workouts and their exercises
pub async fn get_program_detailed(pool: &SqlitePool, id: i64) -> Result<ProgramDetailResponse> {
    let mut conn = pool.acquire().await?;

    let program = ProgramRepository::new(&mut conn)
        .find_by_id(id)
        .await?
        .ok_or(StorageError::NotFound("Program"))?;
    let workouts = WorkoutRepository::new(&mut conn)
        .list_by_program(id)
        .await?;
    let exercises = ExerciseRepository::new(&mut conn)
        .list_by_program(id)
        .await?;

    Ok(ProgramDetailResponse::new(
        program,
        attach_exercises(workouts, exercises),
    ))
}

/// Pair each workout with its exercises, keeping the workout order
fn attach_exercises(workouts: Vec<Workout>, exercises: Vec<Exercise>) -> Vec<WorkoutDetailResponse> {
    let mut by_workout: HashMap<i64, Vec<Exercise>> = HashMap::new();
    for exercise in exercises {
        by_workout.entry(exercise.workout_id).or_default().push(exercise);
    }

    workouts
        .into_iter()
        .map(|workout| {
            let exercises = by_workout.remove(&workout.id).unwrap_or_default();
            WorkoutDetailResponse::new(workout, exercises)
        })
        .collect()
}

/// List the workouts of a program in day order
pub async fn list_program_workouts(pool: &SqlitePool, id: i64) -> Result<Vec<Workout>> {
    let mut conn = pool.acquire().await?;

    if !ProgramRepository::new(&mut conn).exists(id).await? {
        return Err(StorageError::NotFound("Program"));
    }

    WorkoutRepository::new(&mut conn).list_by_program(id).await
}

/// Create a new program
pub async fn create_program(
    pool: &SqlitePool,
    request: &CreateProgramRequest,
) -> Result<WorkoutProgram> {
    let mut conn = pool.acquire().await?;
    let program = ProgramRepository::new(&mut conn).create(request).await?;

    tracing::info!(program_id = program.id, "Created program");
    Ok(program)
}

/// Update a program
pub async fn update_program(
    pool: &SqlitePool,
    id: i64,
    request: &UpdateProgramRequest,
) -> Result<WorkoutProgram> {
    let mut conn = pool.acquire().await?;
    let program = ProgramRepository::new(&mut conn)
        .update(id, request)
        .await?
        .ok_or(StorageError::NotFound("Program"))?;

    tracing::info!(program_id = id, "Updated program");
    Ok(program)
}

/// Delete a program and, through the schema's cascade, everything under it
pub async fn delete_program(pool: &SqlitePool, id: i64) -> Result<MessageResponse> {
    let mut tx = pool.begin().await?;

    if !ProgramRepository::new(&mut tx).delete(id).await? {
        return Err(StorageError::NotFound("Program"));
    }

    tx.commit().await?;

    tracing::info!(program_id = id, "Deleted program");
    Ok(MessageResponse::new("Program deleted"))
}
