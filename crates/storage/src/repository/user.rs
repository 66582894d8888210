use sqlx::SqliteConnection;

use crate::dto::user::CreateUserRequest;
use crate::error::{Result, StorageError};
use crate::models::User;

pub struct UserRepository<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> UserRepository<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        Self { conn }
    }

    pub async fn find_by_telegram_id(&mut self, telegram_id: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, telegram_id, created_at
            FROM users
            WHERE telegram_id = ?
            "#,
        )
        .bind(telegram_id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(user)
    }

    pub async fn exists(&mut self, id: i64) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?)")
            .bind(id)
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(exists)
    }

    /// Register a user. A taken telegram id surfaces as a constraint violation.
    pub async fn create(&mut self, req: &CreateUserRequest) -> Result<User> {
        let created_at = chrono::Utc::now().naive_utc();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (telegram_id, created_at)
            VALUES (?, ?)
            RETURNING id, telegram_id, created_at
            "#,
        )
        .bind(&req.telegram_id)
        .bind(created_at)
        .fetch_one(&mut *self.conn)
        .await
        .map_err(|e| StorageError::classify(e, "User already registered"))?;

        Ok(user)
    }
}
