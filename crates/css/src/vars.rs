//! The CSS variable generator: token tree in, `:root` block out.

use crate::error::CssError;
use crate::naming::{component_variable_name, variable_name};
use crate::value::css_value;
use serde_json::Value;
use tessera_content::refs::{normalize_prop, PropRef};
use tessera_content::{CompileError, UNRESOLVED_MARKER_PREFIX};
use tessera_tokens::{resolve, TokenRef, TokenTree};

/// Flattens a token tree into `:root { --name: value; ... }`.
///
/// Traversal follows the tree's own insertion order, so identical input
/// yields byte-identical output. Component defaults (under the
/// `components` category) are pre-resolved through the token resolver and
/// emitted under the `--component-` prefix; generated stylesheets never
/// contain CSS-level indirections, keeping consuming styles O(1) per
/// property at render time.
pub fn generate(tree: &TokenTree) -> Result<String, CssError> {
    let mut declarations: Vec<(String, String)> = Vec::new();

    for (category, value) in tree.as_map() {
        if category == "components" {
            let mut segments = Vec::new();
            collect_components(value, tree, &mut segments, &mut declarations)?;
        } else {
            let mut segments = vec![category.as_str()];
            collect_tokens(value, &mut segments, &mut declarations);
        }
    }

    let mut css = String::from(":root {\n");
    for (name, value) in &declarations {
        css.push_str("  ");
        css.push_str(name);
        css.push_str(": ");
        css.push_str(value);
        css.push_str(";\n");
    }
    css.push_str("}\n");
    Ok(css)
}

fn collect_tokens<'t>(
    value: &'t Value,
    segments: &mut Vec<&'t str>,
    out: &mut Vec<(String, String)>,
) {
    match value.as_object() {
        Some(group) => {
            for (key, child) in group {
                segments.push(key);
                collect_tokens(child, segments, out);
                segments.pop();
            }
        }
        None => match css_value(value) {
            Some(rendered) => out.push((variable_name(segments), rendered)),
            None => log::warn!(
                "token '{}' has no CSS rendering, skipped",
                segments.join(".")
            ),
        },
    }
}

fn collect_components<'t>(
    value: &'t Value,
    tree: &TokenTree,
    segments: &mut Vec<&'t str>,
    out: &mut Vec<(String, String)>,
) -> Result<(), CssError> {
    if let Some(group) = value.as_object() {
        if !is_ref_object(value) {
            for (key, child) in group {
                segments.push(key);
                collect_components(child, tree, segments, out)?;
                segments.pop();
            }
            return Ok(());
        }
    }

    let dotted = segments.join(".");
    let rendered = match normalize_prop(&dotted, value).map_err(lower_compile_error)? {
        PropRef::ThemeRef(path) => match resolve(&TokenRef::Path(path.clone()), tree) {
            Ok(literal) => css_value(&literal),
            Err(_) => {
                log::warn!("unresolved token '{}' in component default '{}'", path, dotted);
                Some(format!("{}{}", UNRESOLVED_MARKER_PREFIX, path))
            }
        },
        PropRef::Literal(v) | PropRef::CustomRef(v) => css_value(&v),
    };

    match rendered {
        Some(rendered) => out.push((component_variable_name(segments), rendered)),
        None => log::warn!("component default '{}' has no CSS rendering, skipped", dotted),
    }
    Ok(())
}

/// A tagged `{type: "theme"|"custom", value}` object is a leaf even though
/// it is a JSON object; everything else object-shaped is a nested group.
fn is_ref_object(value: &Value) -> bool {
    matches!(
        value
            .as_object()
            .and_then(|o| o.get("type"))
            .and_then(Value::as_str),
        Some("theme") | Some("custom")
    )
}

fn lower_compile_error(e: CompileError) -> CssError {
    CssError::InvalidValue {
        property: "components".to_string(),
        value: e.to_string(),
    }
}
