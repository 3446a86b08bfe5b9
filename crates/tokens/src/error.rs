use thiserror::Error;

/// Errors raised while classifying or resolving token references.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenError {
    /// The path was traversed segment by segment but no literal value was
    /// found at its end (either a segment is missing or the path stops on a
    /// group rather than a leaf).
    #[error("Token not found: '{path}'")]
    NotFound { path: String },

    /// The reference string is not a well-formed dot path.
    #[error("Malformed token path '{path}': {reason}")]
    MalformedPath { path: String, reason: String },

    /// The value supplied as a token tree was not a JSON object.
    #[error("Token tree root must be an object, got {actual}")]
    InvalidTree { actual: String },
}
