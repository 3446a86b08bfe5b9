use thiserror::Error;

/// Error type for storage operations.
///
/// Write failures surface to the caller without automatic retry; a partial
/// publish is worse than a clear failure, so retrying is the caller's call.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Blob not found: {0}")]
    NotFound(String),

    #[error("Failed to write blob '{key}': {message}")]
    WriteFailed { key: String, message: String },

    #[error("Failed to read blob '{key}': {message}")]
    ReadFailed { key: String, message: String },

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}
