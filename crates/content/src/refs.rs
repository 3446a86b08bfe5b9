//! One-shot normalization of duck-typed prop values.
//!
//! Editors have produced three shapes over time: a plain literal, a legacy
//! raw string, and the tagged `{type, value}` object. All of them are
//! normalized here, once, into [`PropRef`]; downstream code matches on the
//! variant and never re-sniffs the JSON shape.

use crate::error::CompileError;
use serde_json::Value;
use tessera_tokens::{TokenPath, TokenRef};

/// A normalized prop value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropRef {
    /// A plain literal (including the legacy raw-string shape).
    Literal(Value),
    /// A reference into the theme's token tree.
    ThemeRef(TokenPath),
    /// An explicit author override; passes through compilation unchanged.
    CustomRef(Value),
}

impl PropRef {
    /// The resolver-facing classification of this prop.
    pub fn as_token_ref(&self) -> TokenRef {
        match self {
            PropRef::Literal(v) | PropRef::CustomRef(v) => TokenRef::Literal(v.clone()),
            PropRef::ThemeRef(path) => TokenRef::Path(path.clone()),
        }
    }
}

/// Normalizes a raw prop value into a [`PropRef`].
///
/// Rules:
/// - an object with `"type": "theme"` must carry a string `"value"` dot
///   path; missing or non-string values fail fast;
/// - an object with `"type": "custom"` must carry a `"value"`, passed
///   through as-is;
/// - an object whose `"type"` is any other string (or absent) is ordinary
///   content and stays a literal;
/// - everything else is a literal.
pub fn normalize_prop(prop: &str, value: &Value) -> Result<PropRef, CompileError> {
    let Some(object) = value.as_object() else {
        return Ok(PropRef::Literal(value.clone()));
    };

    match object.get("type").and_then(Value::as_str) {
        Some("theme") => {
            let path = object
                .get("value")
                .ok_or_else(|| {
                    CompileError::Validation(format!(
                        "prop '{}': theme reference is missing its 'value' path",
                        prop
                    ))
                })?
                .as_str()
                .ok_or_else(|| {
                    CompileError::Validation(format!(
                        "prop '{}': theme reference 'value' must be a string path",
                        prop
                    ))
                })?;
            let path = TokenPath::parse(path).map_err(|e| {
                CompileError::Validation(format!("prop '{}': {}", prop, e))
            })?;
            Ok(PropRef::ThemeRef(path))
        }
        Some("custom") => {
            let value = object.get("value").ok_or_else(|| {
                CompileError::Validation(format!(
                    "prop '{}': custom value is missing its 'value' field",
                    prop
                ))
            })?;
            Ok(PropRef::CustomRef(value.clone()))
        }
        _ => Ok(PropRef::Literal(value.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_literal() {
        let normalized = normalize_prop("label", &json!("Sign up")).unwrap();
        assert_eq!(normalized, PropRef::Literal(json!("Sign up")));
    }

    #[test]
    fn test_theme_reference() {
        let normalized = normalize_prop(
            "backgroundColor",
            &json!({"type": "theme", "value": "colors.primary.500"}),
        )
        .unwrap();
        assert_eq!(
            normalized,
            PropRef::ThemeRef(TokenPath::parse("colors.primary.500").unwrap())
        );
    }

    #[test]
    fn test_custom_reference() {
        let normalized =
            normalize_prop("backgroundColor", &json!({"type": "custom", "value": "#bada55"}))
                .unwrap();
        assert_eq!(normalized, PropRef::CustomRef(json!("#bada55")));
    }

    #[test]
    fn test_content_object_with_unrelated_type_stays_literal() {
        let value = json!({"type": "image", "src": "/logo.png"});
        let normalized = normalize_prop("media", &value).unwrap();
        assert_eq!(normalized, PropRef::Literal(value));
    }

    #[test]
    fn test_theme_reference_missing_value_fails_fast() {
        let result = normalize_prop("color", &json!({"type": "theme"}));
        assert!(matches!(result, Err(CompileError::Validation(_))));
    }

    #[test]
    fn test_theme_reference_with_bad_path_fails_fast() {
        let result = normalize_prop("color", &json!({"type": "theme", "value": "colors..500"}));
        assert!(matches!(result, Err(CompileError::Validation(_))));
    }

    #[test]
    fn test_theme_reference_with_non_string_value_fails_fast() {
        let result = normalize_prop("color", &json!({"type": "theme", "value": 42}));
        assert!(matches!(result, Err(CompileError::Validation(_))));
    }
}
