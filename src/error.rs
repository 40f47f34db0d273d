//! Error types for the academy backend.

use thiserror::Error;

/// Common error type for the academy backend.
#[derive(Error, Debug)]
pub enum AcademyError {
    /// Database error.
    ///
    /// Wraps errors from whichever sqlx backend is compiled in.
    /// Database errors from sqlx are automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// Database connection error.
    #[error("database connection error: {0}")]
    DatabaseConnection(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<sqlx::Error> for AcademyError {
    fn from(e: sqlx::Error) -> Self {
        AcademyError::Database(e.to_string())
    }
}

/// Result type alias for academy operations.
pub type Result<T> = std::result::Result<T, AcademyError>;
