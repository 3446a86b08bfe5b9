//! The design-token tree: nested groups of literal values.

use crate::error::TokenError;
use crate::path::TokenPath;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A nested tree of design tokens (colors, typography, spacing, shadows,
/// per-component defaults).
///
/// Backed by `serde_json::Map`, which preserves insertion order, so every
/// walk over the tree is deterministic: identical input always yields
/// byte-identical generated CSS.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenTree {
    root: Map<String, Value>,
}

impl TokenTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tree from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, TokenError> {
        match value {
            Value::Object(root) => Ok(Self { root }),
            other => Err(TokenError::InvalidTree {
                actual: json_type_name(&other).to_string(),
            }),
        }
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Raw dot-path traversal, segment by segment.
    ///
    /// Returns whatever sits at the end of the path, leaf or group.
    /// [`crate::resolve`] layers the leaf-only rule on top of this.
    pub fn lookup(&self, path: &TokenPath) -> Option<&Value> {
        let mut segments = path.segments();
        let first = segments.next()?;
        let mut current = self.root.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// Whether the path names anything in the tree, leaf or group.
    pub fn contains(&self, path: &TokenPath) -> bool {
        self.lookup(path).is_some()
    }
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_tree() -> TokenTree {
        TokenTree::from_value(json!({
            "colors": {
                "primary": { "500": "#3b82f6", "900": "#1e3a8a" },
                "surface": "#ffffff"
            },
            "spacing": { "4": "1rem" }
        }))
        .unwrap()
    }

    #[test]
    fn test_lookup_matches_manual_traversal() {
        let tree = sample_tree();
        let path = TokenPath::parse("colors.primary.500").unwrap();

        // Manual dictionary traversal of the same segments.
        let manual = tree
            .as_map()
            .get("colors")
            .and_then(|v| v.as_object())
            .and_then(|m| m.get("primary"))
            .and_then(|v| v.as_object())
            .and_then(|m| m.get("500"));

        assert_eq!(tree.lookup(&path), manual);
        assert_eq!(tree.lookup(&path), Some(&json!("#3b82f6")));
    }

    #[test]
    fn test_lookup_missing_segment() {
        let tree = sample_tree();
        assert!(tree.lookup(&TokenPath::parse("colors.accent.500").unwrap()).is_none());
        assert!(tree.lookup(&TokenPath::parse("borders.width").unwrap()).is_none());
    }

    #[test]
    fn test_lookup_stops_at_non_object() {
        let tree = sample_tree();
        // "colors.surface" is a leaf; descending past it finds nothing.
        assert!(tree
            .lookup(&TokenPath::parse("colors.surface.light").unwrap())
            .is_none());
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        assert!(matches!(
            TokenTree::from_value(json!(["not", "a", "tree"])),
            Err(TokenError::InvalidTree { .. })
        ));
    }

    #[test]
    fn test_preserves_insertion_order() {
        let tree = TokenTree::from_value(json!({"z": 1, "a": 2, "m": 3})).unwrap();
        let keys: Vec<_> = tree.as_map().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
