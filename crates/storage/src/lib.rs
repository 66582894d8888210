use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

pub mod dto;
pub mod error;
pub mod models;
pub mod repository;

pub use error::{Result, StorageError};

/// Local file store used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://workout_app.db";

const MAX_CONNECTIONS: u32 = 5;

/// Process-wide handle to the relational store.
///
/// Cloning is cheap; every clone shares the same pool. Callers acquire a
/// connection or transaction per unit of work and release it by dropping it.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the store at `database_url`, creating the file if needed.
    ///
    /// Foreign keys are switched on for every connection so that the
    /// `ON DELETE CASCADE` rules in the schema are enforced. An in-memory URL
    /// gets a single connection that never expires, otherwise each pooled
    /// connection would see its own empty database.
    pub async fn new(database_url: &str) -> Result<Self> {
        let in_memory = is_in_memory(database_url);

        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5));

        let pool = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .connect_with(options)
                .await?
        } else {
            SqlitePoolOptions::new()
                .max_connections(MAX_CONNECTIONS)
                .connect_with(options.journal_mode(SqliteJournalMode::Wal))
                .await?
        };

        tracing::debug!(in_memory, "Opened SQLite connection pool");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        let migrator = sqlx::migrate!("./migrations");
        migrator.run(&self.pool).await?;

        tracing::debug!(migrations = migrator.iter().count(), "Database schema is up to date");
        Ok(())
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:test?mode=memory&cache=shared"));
        assert!(!is_in_memory(DEFAULT_DATABASE_URL));
    }

    #[tokio::test]
    async fn migrations_create_schema_in_memory() {
        let db = Database::new("sqlite::memory:").await.unwrap();
        db.run_migrations().await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE '\\_%' ESCAPE '\\' AND name NOT LIKE 'sqlite%' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();

        assert_eq!(
            tables,
            vec!["exercises", "user_progress", "users", "workout_programs", "workouts"]
        );
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let db = Database::new("sqlite::memory:").await.unwrap();
        let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
