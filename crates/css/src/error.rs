use thiserror::Error;

/// Errors that can occur while parsing style values or emitting CSS.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CssError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}
