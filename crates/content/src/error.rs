use tessera_tokens::TokenError;
use thiserror::Error;

/// Errors raised while validating or compiling content documents.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    /// A node or prop does not have a well-formed shape. Compilation fails
    /// fast on these rather than silently skipping the node.
    #[error("Malformed content document: {0}")]
    Validation(String),

    /// A token reference could not be resolved under the strict policy.
    #[error(transparent)]
    Token(#[from] TokenError),
}
