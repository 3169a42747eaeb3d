use thiserror::Error;

/// Storage-specific error types for the Pontual attendance controller.
///
/// These errors represent failures in database operations and integrity
/// checks around the attendance record lifecycle.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Database connection or query execution failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration execution failed
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Entity not found in database
    #[error("Entity not found: {entity_type} with {field}={value}")]
    NotFound {
        entity_type: String,
        field: String,
        value: String,
    },

    /// A create-only or fill-once operation found the target already taken
    ///
    /// Raised when a clock-on insert hits an existing record for the same
    /// day, when a clock-off update matches no open record, or when a tag
    /// attachment collides with another employee's tag.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl StorageError {
    /// Map unique-constraint violations to [`StorageError::Conflict`],
    /// leaving other database failures untouched.
    pub(crate) fn conflict_on_unique(err: sqlx::Error, message: &str) -> StorageError {
        match err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StorageError::Conflict(message.to_string())
            }
            other => StorageError::Database(other),
        }
    }

    /// Check whether this error is a conflict (lost race or duplicate key).
    pub fn is_conflict(&self) -> bool {
        matches!(self, StorageError::Conflict(_))
    }
}

/// Specialized result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
