//! Formatting of token leaf values as CSS property values.

use serde_json::Value;

/// Formats a token leaf as it appears on the right-hand side of a CSS
/// declaration. Returns `None` for values that have no CSS rendering
/// (null, objects).
pub fn css_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(format_number(n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => {
            // Font stacks and similar lists: comma-joined, multi-word
            // entries quoted.
            let parts: Vec<String> = items.iter().filter_map(css_list_entry).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        Value::Null | Value::Object(_) => None,
    }
}

fn css_list_entry(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let s = s.trim();
            if s.contains(char::is_whitespace) && !s.starts_with('"') {
                Some(format!("\"{}\"", s))
            } else {
                Some(s.to_string())
            }
        }
        Value::Number(n) => Some(format_number(n)),
        _ => None,
    }
}

/// Numbers print without a trailing `.0` so `16` and `16.0` emit
/// identically (byte-stable output).
pub fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 => format!("{}", f as i64),
        Some(f) => format!("{}", f),
        None => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings_pass_through() {
        assert_eq!(css_value(&json!("#3b82f6")).unwrap(), "#3b82f6");
        assert_eq!(css_value(&json!("  1rem ")).unwrap(), "1rem");
    }

    #[test]
    fn test_numbers_trim_trailing_zero() {
        assert_eq!(css_value(&json!(16)).unwrap(), "16");
        assert_eq!(css_value(&json!(16.0)).unwrap(), "16");
        assert_eq!(css_value(&json!(1.5)).unwrap(), "1.5");
    }

    #[test]
    fn test_font_stack_quoting() {
        assert_eq!(
            css_value(&json!(["Helvetica Neue", "Inter", "sans-serif"])).unwrap(),
            "\"Helvetica Neue\", Inter, sans-serif"
        );
    }

    #[test]
    fn test_unrenderable_values() {
        assert!(css_value(&json!(null)).is_none());
        assert!(css_value(&json!({"nested": true})).is_none());
    }
}
