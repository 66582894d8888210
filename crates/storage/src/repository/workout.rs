use sqlx::SqliteConnection;

use crate::dto::workout::CreateWorkoutRequest;
use crate::error::{Result, StorageError};
use crate::models::Workout;

pub struct WorkoutRepository<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&mut self, id: i64) -> Result<Option<Workout>> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, program_id, day_number, title, description
            FROM workouts
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(workout)
    }

    pub async fn exists(&mut self, id: i64) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM workouts WHERE id = ?)")
                .bind(id)
                .fetch_one(&mut *self.conn)
                .await?;

        Ok(exists)
    }

    /// Workouts of a program in day order
    pub async fn list_by_program(&mut self, program_id: i64) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(
            r#"
            SELECT id, program_id, day_number, title, description
            FROM workouts
            WHERE program_id = ?
            ORDER BY day_number, id
            "#,
        )
        .bind(program_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(workouts)
    }

    pub async fn create(&mut self, req: &CreateWorkoutRequest) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(
            r#"
            INSERT INTO workouts (program_id, day_number, title, description)
            VALUES (?, ?, ?, ?)
            RETURNING id, program_id, day_number, title, description
            "#,
        )
        .bind(req.program_id)
        .bind(req.day_number)
        .bind(&req.title)
        .bind(&req.description)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| StorageError::classify(e, "Program does not exist"))?;

        Ok(workout)
    }

    /// Delete a workout together with its exercises and progress records
    pub async fn delete(&mut self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
