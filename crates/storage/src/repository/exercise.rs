use sqlx::SqliteConnection;

use crate::dto::exercise::{CreateExerciseRequest, UpdateExerciseRequest};
use crate::error::{Result, StorageError};
use crate::models::Exercise;

pub struct ExerciseRepository<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> ExerciseRepository<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&mut self, id: i64) -> Result<Option<Exercise>> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, workout_id, name, sets, reps, rest_time, description
            FROM exercises
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(exercise)
    }

    pub async fn list_by_workout(&mut self, workout_id: i64) -> Result<Vec<Exercise>> {
        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, workout_id, name, sets, reps, rest_time, description
            FROM exercises
            WHERE workout_id = ?
            ORDER BY id
            "#,
        )
        .bind(workout_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(exercises)
    }

    /// Every exercise of every workout in a program, in one query
    pub async fn list_by_program(&mut self, program_id: i64) -> Result<Vec<Exercise>> {
        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT e.id, e.workout_id, e.name, e.sets, e.reps, e.rest_time, e.description
            FROM exercises e
            JOIN workouts w ON w.id = e.workout_id
            WHERE w.program_id = ?
            ORDER BY e.workout_id, e.id
            "#,
        )
        .bind(program_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(exercises)
    }

    pub async fn create(&mut self, req: &CreateExerciseRequest) -> Result<Exercise> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercises (workout_id, name, sets, reps, rest_time, description)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, workout_id, name, sets, reps, rest_time, description
            "#,
        )
        .bind(req.workout_id)
        .bind(&req.name)
        .bind(req.sets)
        .bind(&req.reps)
        .bind(req.rest_time)
        .bind(&req.description)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| StorageError::classify(e, "Workout does not exist"))?;

        Ok(exercise)
    }

    /// Replace every editable field. Returns `None` for an unknown id.
    pub async fn update(
        &mut self,
        id: i64,
        req: &UpdateExerciseRequest,
    ) -> Result<Option<Exercise>> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            UPDATE exercises
            SET name = ?,
                sets = ?,
                reps = ?,
                rest_time = ?,
                description = ?
            WHERE id = ?
            RETURNING id, workout_id, name, sets, reps, rest_time, description
            "#,
        )
        .bind(&req.name)
        .bind(req.sets)
        .bind(&req.reps)
        .bind(req.rest_time)
        .bind(&req.description)
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(exercise)
    }

    pub async fn delete(&mut self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
