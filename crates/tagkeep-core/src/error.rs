//! Error types for tagkeep.

use thiserror::Error;

/// Result type alias using tagkeep's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for tagkeep operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Tag not found
    #[error("Tag not found: {0}")]
    TagNotFound(i64),

    /// Payload failed validation (missing or empty required field)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_found() {
        let err = Error::NotFound("test resource".to_string());
        assert_eq!(err.to_string(), "Not found: test resource");
    }

    #[test]
    fn test_error_display_tag_not_found() {
        let err = Error::TagNotFound(42);
        assert_eq!(err.to_string(), "Tag not found: 42");
    }

    #[test]
    fn test_error_display_validation() {
        let err = Error::Validation("name is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: name is required");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("bad PORT".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad PORT");
    }

    #[test]
    fn test_from_sqlx_error() {
        let err: Error = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, Error::Database(_)));
        assert!(err.to_string().starts_with("Database error:"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
