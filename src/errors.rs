/*!
 * Error types for the camlex application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the storage engine (constraint violation, I/O failure)
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    /// A difficulty level outside the allowed set
    #[error("Invalid difficulty level: '{0}' (expected beginner, intermediate or advanced)")]
    InvalidDifficulty(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalidDifficulty_display_shouldNameTheValue() {
        let err = AppError::InvalidDifficulty("expert".to_string());
        assert!(err.to_string().contains("'expert'"));
    }
}
