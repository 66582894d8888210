use sqlx::SqlitePool;
use storage::{
    dto::progress::CreateProgressRequest,
    error::{Result, StorageError},
    models::{CompletionState, UserProgress},
    repository::{ProgramRepository, ProgressRepository, UserRepository, WorkoutRepository},
};

/// Start tracking a workout for a user.
///
/// The user, program and workout are checked in that order and the first
/// missing one is reported; nothing is written unless all three exist.
pub async fn create_progress(
    pool: &SqlitePool,
    request: &CreateProgressRequest,
) -> Result<UserProgress> {
    let mut tx = pool.begin().await?;

    if !UserRepository::new(&mut tx).exists(request.user_id).await? {
        return Err(StorageError::NotFound("User"));
    }
    if !ProgramRepository::new(&mut tx)
        .exists(request.program_id)
        .await?
    {
        return Err(StorageError::NotFound("Program"));
    }
    if !WorkoutRepository::new(&mut tx)
        .exists(request.workout_id)
        .await?
    {
        return Err(StorageError::NotFound("Workout"));
    }

    let state = CompletionState::requested(request.is_completed, now());
    let progress = ProgressRepository::new(&mut tx)
        .create(request, state)
        .await?;

    tx.commit().await?;

    tracing::info!(
        progress_id = progress.id,
        user_id = progress.user_id,
        workout_id = progress.workout_id,
        "Created progress record"
    );
    Ok(progress)
}

pub async fn get_progress(pool: &SqlitePool, id: i64) -> Result<UserProgress> {
    let mut conn = pool.acquire().await?;
    ProgressRepository::new(&mut conn)
        .find_by_id(id)
        .await?
        .ok_or(StorageError::NotFound("Progress"))
}

/// Mark a record completed (stamping the time) or incomplete (clearing it)
pub async fn set_completion(pool: &SqlitePool, id: i64, is_completed: bool) -> Result<UserProgress> {
    let mut conn = pool.acquire().await?;
    let progress = ProgressRepository::new(&mut conn)
        .set_completion(id, CompletionState::requested(is_completed, now()))
        .await?
        .ok_or(StorageError::NotFound("Progress"))?;

    tracing::info!(progress_id = id, is_completed, "Updated completion");
    Ok(progress)
}

fn now() -> chrono::NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
