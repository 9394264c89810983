//! Error handling for siddur-store
//!
//! Wraps siddur-core ExError with store-specific helpers

use siddur_core::errors::{ExError, ExErrorKind};

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a catalog validation error
pub fn catalog_validation(reason: &str) -> ExError {
    ExError::new(ExErrorKind::InvalidInput)
        .with_op("catalog_parse")
        .with_message(reason.to_string())
}

/// Create a catalog validation error naming the offending chunk
pub fn catalog_chunk_invalid(chunk_id: &str, reason: &str) -> ExError {
    catalog_validation(reason).with_chunk_id(chunk_id)
}

/// Create an error for a directory file that cannot be decoded
pub fn directory_corrupt(path: &std::path::Path, reason: &str) -> ExError {
    ExError::new(ExErrorKind::Persistence)
        .with_op("directory_open")
        .with_message(format!("{}: {}", path.display(), reason))
}

/// Create a serialization error
pub fn serialization_error(operation: &str, err: serde_json::Error) -> ExError {
    ExError::new(ExErrorKind::Serialization)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> ExError {
    ExError::new(ExErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}
