//! Token reference resolution.
//!
//! A reference is classified as literal vs. path exactly once, at its
//! boundary (construction of [`TokenRef`]); resolution never re-sniffs the
//! shape mid-traversal. `resolve` is pure: no storage, no caches, no
//! side effects.

use crate::error::TokenError;
use crate::path::TokenPath;
use crate::tree::TokenTree;
use serde_json::Value;

/// A classified token reference: either a literal value passed through
/// unchanged, or a dot path to be traversed through the tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenRef {
    /// A literal value (a hex color, a raw length, a number). Resolution
    /// returns it unchanged.
    Literal(Value),
    /// A dot path into the token tree, e.g. `colors.primary.500`.
    Path(TokenPath),
}

impl TokenRef {
    /// Classifies a dot-path string as a path reference.
    pub fn path(path: &str) -> Result<Self, TokenError> {
        TokenPath::parse(path).map(TokenRef::Path)
    }

    /// Classifies a value as a literal passthrough.
    pub fn literal(value: impl Into<Value>) -> Self {
        TokenRef::Literal(value.into())
    }
}

/// Resolves a classified reference against a token tree.
///
/// Literals pass through untouched. Paths are traversed segment by segment;
/// the path must end on a leaf (string, number, bool, or array), since a
/// group is not a usable literal. Anything else is `TokenNotFound`.
pub fn resolve(reference: &TokenRef, tree: &TokenTree) -> Result<Value, TokenError> {
    match reference {
        TokenRef::Literal(value) => Ok(value.clone()),
        TokenRef::Path(path) => match tree.lookup(path) {
            Some(Value::Object(_)) | Some(Value::Null) | None => Err(TokenError::NotFound {
                path: path.to_string(),
            }),
            Some(leaf) => Ok(leaf.clone()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree() -> TokenTree {
        TokenTree::from_value(json!({
            "colors": { "primary": { "500": "#3b82f6" } },
            "typography": { "fontFamily": { "heading": ["Inter", "sans-serif"] } },
            "spacing": { "4": "1rem" },
            "borderRadius": { "md": "0.375rem" }
        }))
        .unwrap()
    }

    #[test]
    fn test_literal_passes_through_unchanged() {
        let reference = TokenRef::literal("#ff0000");
        assert_eq!(resolve(&reference, &tree()).unwrap(), json!("#ff0000"));
    }

    #[test]
    fn test_path_resolves_to_leaf() {
        let reference = TokenRef::path("colors.primary.500").unwrap();
        assert_eq!(resolve(&reference, &tree()).unwrap(), json!("#3b82f6"));
    }

    #[test]
    fn test_array_leaf_is_a_literal() {
        let reference = TokenRef::path("typography.fontFamily.heading").unwrap();
        assert_eq!(
            resolve(&reference, &tree()).unwrap(),
            json!(["Inter", "sans-serif"])
        );
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let reference = TokenRef::path("colors.primary.300").unwrap();
        assert_eq!(
            resolve(&reference, &tree()),
            Err(TokenError::NotFound {
                path: "colors.primary.300".to_string()
            })
        );
    }

    #[test]
    fn test_group_is_not_a_literal() {
        let reference = TokenRef::path("colors.primary").unwrap();
        assert!(matches!(
            resolve(&reference, &tree()),
            Err(TokenError::NotFound { .. })
        ));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let reference = TokenRef::path("spacing.4").unwrap();
        let t = tree();
        assert_eq!(
            resolve(&reference, &t).unwrap(),
            resolve(&reference, &t).unwrap()
        );
    }
}
