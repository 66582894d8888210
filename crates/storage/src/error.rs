use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The named entity does not exist.
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

impl StorageError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e)) if e.is_unique_violation()
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e)) if e.is_foreign_key_violation()
        )
    }

    /// Re-labels unique and foreign-key failures as constraint violations carrying `message`.
    pub(crate) fn classify(error: sqlx::Error, message: &str) -> Self {
        let error = StorageError::from(error);
        if error.is_unique_violation() || error.is_foreign_key_violation() {
            StorageError::ConstraintViolation(message.to_string())
        } else {
            error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_entity() {
        assert_eq!(StorageError::NotFound("Workout").to_string(), "Workout not found");
    }

    #[test]
    fn row_not_found_is_not_a_constraint_violation() {
        let error = StorageError::classify(sqlx::Error::RowNotFound, "duplicate");
        assert!(matches!(error, StorageError::Database(sqlx::Error::RowNotFound)));
        assert!(!error.is_unique_violation());
        assert!(!error.is_foreign_key_violation());
    }
}
