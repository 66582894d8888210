use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::dto::program::{CreateProgramRequest, ProgramFilter, UpdateProgramRequest};
use crate::error::{Result, StorageError};
use crate::models::WorkoutProgram;

pub struct ProgramRepository<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> ProgramRepository<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// List programs matching every supplied filter, ordered by id
    pub async fn list(&mut self, filter: &ProgramFilter) -> Result<Vec<WorkoutProgram>> {
        let mut query: QueryBuilder<Sqlite> = QueryBuilder::new(
            r#"
            SELECT id, difficulty, goal, location, name, description
            FROM workout_programs
            WHERE 1=1
            "#,
        );

        if let Some(difficulty) = filter.difficulty() {
            query.push(" AND difficulty = ");
            query.push_bind(difficulty);
        }

        if let Some(goal) = filter.goal() {
            query.push(" AND goal = ");
            query.push_bind(goal);
        }

        if let Some(location) = filter.location() {
            query.push(" AND location = ");
            query.push_bind(location);
        }

        query.push(" ORDER BY id LIMIT ");
        query.push_bind(filter.limit);
        query.push(" OFFSET ");
        query.push_bind(filter.skip);

        let programs = query
            .build_query_as::<WorkoutProgram>()
            .fetch_all(&mut *self.conn)
            .await?;

        Ok(programs)
    }

    pub async fn count(&mut self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM workout_programs")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }

    pub async fn find_by_id(&mut self, id: i64) -> Result<Option<WorkoutProgram>> {
        let program = sqlx::query_as::<_, WorkoutProgram>(
            r#"
            SELECT id, difficulty, goal, location, name, description
            FROM workout_programs
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(program)
    }

    pub async fn exists(&mut self, id: i64) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM workout_programs WHERE id = ?)",
        )
        .bind(id)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(exists)
    }

    pub async fn create(&mut self, req: &CreateProgramRequest) -> Result<WorkoutProgram> {
        let program = sqlx::query_as::<_, WorkoutProgram>(
            r#"
            INSERT INTO workout_programs (difficulty, goal, location, name, description)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, difficulty, goal, location, name, description
            "#,
        )
        .bind(&req.difficulty)
        .bind(&req.goal)
        .bind(&req.location)
        .bind(&req.name)
        .bind(&req.description)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(program)
    }

    /// Replace a program's fields. Returns `None` for an unknown id.
    pub async fn update(
        &mut self,
        id: i64,
        req: &UpdateProgramRequest,
    ) -> Result<Option<WorkoutProgram>> {
        let program = sqlx::query_as::<_, WorkoutProgram>(
            r#"
            UPDATE workout_programs
            SET name = ?,
                description = COALESCE(?, description),
                difficulty = ?,
                goal = ?,
                location = ?
            WHERE id = ?
            RETURNING id, difficulty, goal, location, name, description
            "#,
        )
        .bind(&req.name)
        .bind(&req.description)
        .bind(&req.difficulty)
        .bind(&req.goal)
        .bind(&req.location)
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(program)
    }

    /// Delete a program; its workouts, exercises and progress go with it.
    /// Returns `false` when no row matched.
    pub async fn delete(&mut self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM workout_programs WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await
            .map_err(|e| {
                StorageError::classify(
                    e,
                    "Program cannot be deleted while dependent records reference it",
                )
            })?;

        Ok(result.rows_affected() > 0)
    }
}
