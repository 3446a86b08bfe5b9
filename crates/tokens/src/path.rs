//! Dot-path references into a token tree.

use crate::error::TokenError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A validated dot path such as `colors.primary.500`.
///
/// Validation happens once, at construction; traversal code can assume the
/// path is non-empty and free of empty segments.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenPath(Arc<str>);

impl TokenPath {
    /// Parses and validates a dot-path string.
    pub fn parse(path: &str) -> Result<Self, TokenError> {
        if path.is_empty() {
            return Err(TokenError::MalformedPath {
                path: path.to_string(),
                reason: "path is empty".to_string(),
            });
        }
        if path.split('.').any(str::is_empty) {
            return Err(TokenError::MalformedPath {
                path: path.to_string(),
                reason: "path contains an empty segment".to_string(),
            });
        }
        Ok(Self(path.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates the path's segments in traversal order.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

impl TryFrom<String> for TokenPath {
    type Error = TokenError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TokenPath> for String {
    fn from(path: TokenPath) -> Self {
        path.0.to_string()
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
