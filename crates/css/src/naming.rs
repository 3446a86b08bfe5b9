//! Custom-property naming: a pure, deterministic function of token path.
//!
//! Path segments join with single hyphens and camelCase segments are
//! kebab-cased. Each top-level category has a stable alias so the emitted
//! names read like hand-written design-system CSS:
//!
//! - `colors.primary.500`            -> `--color-primary-500`
//! - `typography.fontFamily.heading` -> `--font-family-heading`
//! - `spacing.4`                     -> `--spacing-4`
//! - `borderRadius.md`               -> `--border-radius-md`
//! - `shadows.md`                    -> `--shadow-md`
//!
//! Component defaults use their own prefix:
//! `components.button.primary.backgroundColor`
//! -> `--component-button-primary-background-color`.

/// Converts one camelCase path segment to kebab-case.
///
/// Lowercases everything, inserts a hyphen before each interior uppercase
/// run, and maps whitespace/underscores to hyphens. Digits pass through.
pub fn kebab_case(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len() + 2);
    let mut prev_lower_or_digit = false;
    for c in segment.chars() {
        if c.is_ascii_uppercase() {
            if prev_lower_or_digit {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
            prev_lower_or_digit = false;
        } else if c == '_' || c.is_whitespace() {
            if !out.ends_with('-') {
                out.push('-');
            }
            prev_lower_or_digit = false;
        } else {
            out.push(c);
            prev_lower_or_digit = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    out
}

/// The stable alias for a top-level token category. `None` means the
/// category segment is dropped entirely (typography's children already
/// carry their own prefix, `fontFamily`, `lineHeight`, ...).
fn category_alias(category: &str) -> Option<String> {
    match category {
        "colors" => Some("color".to_string()),
        "shadows" => Some("shadow".to_string()),
        "typography" => None,
        other => Some(kebab_case(other)),
    }
}

/// Builds the variable name for a token path, given its segments.
pub fn variable_name(segments: &[&str]) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(segments.len());
    if let Some((category, rest)) = segments.split_first() {
        if let Some(alias) = category_alias(category) {
            parts.push(alias);
        }
        parts.extend(rest.iter().map(|s| kebab_case(s)));
        // A leaf sitting directly on a dropped category still needs a name.
        if parts.is_empty() {
            parts.push(kebab_case(category));
        }
    }
    format!("--{}", parts.join("-"))
}

/// Builds the variable name for a component-default path
/// (`[name, variant, property...]` under the `components` category).
pub fn component_variable_name(segments: &[&str]) -> String {
    let parts: Vec<String> = segments.iter().map(|s| kebab_case(s)).collect();
    format!("--component-{}", parts.join("-"))
}

/// Converts a page-builder node type ("HeroBanner") into its CSS class
/// ("hero-banner").
pub fn css_class(node_type: &str) -> String {
    kebab_case(node_type)
}
