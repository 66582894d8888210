use sqlx::SqliteConnection;

use crate::dto::progress::CreateProgressRequest;
use crate::error::{Result, StorageError};
use crate::models::{CompletionState, UserProgress};

pub struct ProgressRepository<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> ProgressRepository<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    pub async fn find_by_id(&mut self, id: i64) -> Result<Option<UserProgress>> {
        let progress = sqlx::query_as::<_, UserProgress>(
            r#"
            SELECT id, user_id, program_id, workout_id, is_completed, completed_at
            FROM user_progress
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(progress)
    }

    /// Progress of a user, optionally narrowed to one program
    pub async fn list_by_user(
        &mut self,
        user_id: i64,
        program_id: Option<i64>,
    ) -> Result<Vec<UserProgress>> {
        let progress = sqlx::query_as::<_, UserProgress>(
            r#"
            SELECT id, user_id, program_id, workout_id, is_completed, completed_at
            FROM user_progress
            WHERE user_id = ?
              AND (? IS NULL OR program_id = ?)
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .bind(program_id)
        .bind(program_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(progress)
    }

    pub async fn create(
        &mut self,
        req: &CreateProgressRequest,
        state: CompletionState,
    ) -> Result<UserProgress> {
        let progress = sqlx::query_as::<_, UserProgress>(
            r#"
            INSERT INTO user_progress (user_id, program_id, workout_id, is_completed, completed_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING id, user_id, program_id, workout_id, is_completed, completed_at
            "#,
        )
        .bind(req.user_id)
        .bind(req.program_id)
        .bind(req.workout_id)
        .bind(state.is_completed())
        .bind(state.completed_at())
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| StorageError::classify(e, "Referenced user, program or workout does not exist"))?;

        Ok(progress)
    }

    /// Write a completion state. Returns `None` for an unknown id.
    pub async fn set_completion(
        &mut self,
        id: i64,
        state: CompletionState,
    ) -> Result<Option<UserProgress>> {
        let progress = sqlx::query_as::<_, UserProgress>(
            r#"
            UPDATE user_progress
            SET is_completed = ?,
                completed_at = ?
            WHERE id = ?
            RETURNING id, user_id, program_id, workout_id, is_completed, completed_at
            "#,
        )
        .bind(state.is_completed())
        .bind(state.completed_at())
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(progress)
    }
}
