use sqlx::SqliteConnection;
use storage::{
    Database,
    repository::{ExerciseRepository, ProgramRepository, WorkoutRepository},
};

use crate::models::ProgramSeed;
use crate::sample::sample_program;
use crate::validation::ProgramValidator;
use crate::Result;

/// Rows written for one program
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub program_id: i64,
    pub workouts: usize,
    pub exercises: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedReport {
    /// At least one program existed, nothing was written
    AlreadySeeded,
    Seeded(ImportSummary),
}

/// Insert the sample program unless the database already holds programs.
///
/// The check and the inserts share one transaction, so a failure leaves the
/// database untouched.
pub async fn seed_sample_data(db: &Database) -> Result<SeedReport> {
    let mut tx = db.pool().begin().await?;

    let existing = ProgramRepository::new(&mut tx).count().await?;
    if existing > 0 {
        tracing::info!(programs = existing, "Database already has data, skipping sample program");
        return Ok(SeedReport::AlreadySeeded);
    }

    let summary = insert_program(&mut tx, &sample_program()).await?;
    tx.commit().await?;

    tracing::info!(
        program_id = summary.program_id,
        workouts = summary.workouts,
        exercises = summary.exercises,
        "Sample program added"
    );
    Ok(SeedReport::Seeded(summary))
}

/// Validate and insert a program definition with all its workouts and
/// exercises in one transaction.
pub async fn import_program(db: &Database, seed: &ProgramSeed) -> Result<ImportSummary> {
    let report = ProgramValidator::validate(seed)?;
    report.log_warnings();

    let mut tx = db.pool().begin().await?;
    let summary = insert_program(&mut tx, seed).await?;
    tx.commit().await?;

    tracing::info!(
        program_id = summary.program_id,
        workouts = summary.workouts,
        exercises = summary.exercises,
        "Imported program '{}'",
        seed.name
    );
    Ok(summary)
}

async fn insert_program(conn: &mut SqliteConnection, seed: &ProgramSeed) -> Result<ImportSummary> {
    let program = ProgramRepository::new(conn).create(&seed.to_request()).await?;

    let mut summary = ImportSummary {
        program_id: program.id,
        workouts: 0,
        exercises: 0,
    };

    for workout_seed in &seed.workouts {
        let workout = WorkoutRepository::new(conn)
            .create(&workout_seed.to_request(program.id))
            .await?;
        summary.workouts += 1;

        for exercise_seed in &workout_seed.exercises {
            ExerciseRepository::new(conn)
                .create(&exercise_seed.to_request(workout.id))
                .await?;
            summary.exercises += 1;
        }

        tracing::debug!(
            workout_id = workout.id,
            day_number = workout.day_number,
            exercises = workout_seed.exercises.len(),
            "Inserted workout"
        );
    }

    Ok(summary)
}
