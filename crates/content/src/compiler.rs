//! The document compiler: raw documents in, literal-carrying copies out.

use crate::document::{ContentDocument, ContentNode};
use crate::error::CompileError;
use crate::refs::{normalize_prop, PropRef};
use serde_json::{Map, Value};
use tessera_tokens::{resolve, TokenError, TokenRef, TokenTree};

/// Marker prefix substituted for a theme reference that cannot be resolved
/// under the best-effort policy. Deliberately invalid as a CSS value so a
/// broken token is visible in the rendered page instead of silently
/// falling back to some default.
pub const UNRESOLVED_MARKER_PREFIX: &str = "unresolved:";

/// What to do when a theme reference does not resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompilePolicy {
    /// Fail the whole compile with `TokenNotFound`.
    Strict,
    /// Substitute `unresolved:<path>` for the offending prop and continue.
    #[default]
    BestEffort,
}

/// Configuration for a compile run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompileOptions {
    pub policy: CompilePolicy,
}

/// Compiles a document against a token tree.
///
/// Every prop tagged as a theme reference is replaced with its resolved
/// literal; custom and literal props pass through unchanged. The input
/// document is not mutated; callers keep the raw copy so the document can
/// be recompiled after a token-tree edit without losing authoring intent.
///
/// Compilation is total over well-formed documents; a malformed node or
/// prop shape fails fast with a `Validation` error.
pub fn compile(
    document: &ContentDocument,
    tree: &TokenTree,
    options: CompileOptions,
) -> Result<ContentDocument, CompileError> {
    let content = document
        .content
        .iter()
        .map(|node| compile_node(node, tree, options))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ContentDocument {
        root: document.root.clone(),
        content,
    })
}

fn compile_node(
    node: &ContentNode,
    tree: &TokenTree,
    options: CompileOptions,
) -> Result<ContentNode, CompileError> {
    if node.node_type.is_empty() {
        return Err(CompileError::Validation(
            "node is missing its 'type'".to_string(),
        ));
    }

    let mut props = Map::with_capacity(node.props.len());
    for (key, value) in &node.props {
        let compiled = compile_prop(key, value, tree, options)?;
        props.insert(key.clone(), compiled);
    }

    let children = node
        .children
        .iter()
        .map(|child| compile_node(child, tree, options))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ContentNode {
        node_type: node.node_type.clone(),
        props,
        children,
    })
}

fn compile_prop(
    key: &str,
    value: &Value,
    tree: &TokenTree,
    options: CompileOptions,
) -> Result<Value, CompileError> {
    match normalize_prop(key, value)? {
        PropRef::Literal(v) | PropRef::CustomRef(v) => Ok(v),
        PropRef::ThemeRef(path) => {
            match resolve(&TokenRef::Path(path.clone()), tree) {
                Ok(literal) => Ok(literal),
                Err(TokenError::NotFound { .. }) if options.policy == CompilePolicy::BestEffort => {
                    log::warn!("unresolved token '{}' in prop '{}'", path, key);
                    Ok(Value::String(format!("{}{}", UNRESOLVED_MARKER_PREFIX, path)))
                }
                Err(e) => Err(e.into()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree() -> TokenTree {
        TokenTree::from_value(json!({
            "colors": { "primary": { "500": "#3b82f6" } },
            "spacing": { "4": "1rem" }
        }))
        .unwrap()
    }

    fn button_doc() -> ContentDocument {
        serde_json::from_value(json!({
            "root": "header",
            "content": [{
                "type": "Button",
                "props": {
                    "backgroundColor": { "type": "theme", "value": "colors.primary.500" },
                    "textColor": { "type": "custom", "value": "#222222" },
                    "label": "Sign up"
                }
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_theme_refs_become_literals() {
        let compiled = compile(&button_doc(), &tree(), CompileOptions::default()).unwrap();
        let props = &compiled.content[0].props;
        assert_eq!(props["backgroundColor"], json!("#3b82f6"));
        assert_eq!(props["textColor"], json!("#222222"));
        assert_eq!(props["label"], json!("Sign up"));
    }

    #[test]
    fn test_raw_document_is_untouched() {
        let raw = button_doc();
        let _ = compile(&raw, &tree(), CompileOptions::default()).unwrap();
        assert_eq!(
            raw.content[0].props["backgroundColor"],
            json!({ "type": "theme", "value": "colors.primary.500" })
        );
    }

    #[test]
    fn test_compile_is_idempotent_for_unchanged_inputs() {
        let raw = button_doc();
        let t = tree();
        let once = compile(&raw, &t, CompileOptions::default()).unwrap();
        let twice = compile(&raw, &t, CompileOptions::default()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_recompile_after_tree_edit_changes_only_affected_props() {
        let raw = button_doc();
        let before = compile(&raw, &tree(), CompileOptions::default()).unwrap();

        let edited = TokenTree::from_value(json!({
            "colors": { "primary": { "500": "#ef4444" } },
            "spacing": { "4": "1rem" }
        }))
        .unwrap();
        let after = compile(&raw, &edited, CompileOptions::default()).unwrap();

        assert_eq!(after.content[0].props["backgroundColor"], json!("#ef4444"));
        assert_eq!(
            after.content[0].props["textColor"],
            before.content[0].props["textColor"]
        );
        assert_eq!(
            after.content[0].props["label"],
            before.content[0].props["label"]
        );
    }

    #[test]
    fn test_best_effort_marks_unresolved_tokens() {
        let doc: ContentDocument = serde_json::from_value(json!({
            "root": "header",
            "content": [{
                "type": "Button",
                "props": { "backgroundColor": { "type": "theme", "value": "colors.accent.500" } }
            }]
        }))
        .unwrap();

        let compiled = compile(&doc, &tree(), CompileOptions::default()).unwrap();
        assert_eq!(
            compiled.content[0].props["backgroundColor"],
            json!("unresolved:colors.accent.500")
        );
    }

    #[test]
    fn test_strict_policy_fails_the_compile() {
        let doc: ContentDocument = serde_json::from_value(json!({
            "root": "header",
            "content": [{
                "type": "Button",
                "props": { "backgroundColor": { "type": "theme", "value": "colors.accent.500" } }
            }]
        }))
        .unwrap();

        let options = CompileOptions {
            policy: CompilePolicy::Strict,
        };
        assert!(matches!(
            compile(&doc, &tree(), options),
            Err(CompileError::Token(TokenError::NotFound { .. }))
        ));
    }

    #[test]
    fn test_malformed_node_fails_fast() {
        let doc: ContentDocument = serde_json::from_value(json!({
            "root": "header",
            "content": [{ "type": "", "props": {} }]
        }))
        .unwrap();
        assert!(matches!(
            compile(&doc, &tree(), CompileOptions::default()),
            Err(CompileError::Validation(_))
        ));
    }

    #[test]
    fn test_nested_children_are_compiled() {
        let doc: ContentDocument = serde_json::from_value(json!({
            "root": "footer",
            "content": [{
                "type": "Column",
                "props": {},
                "children": [{
                    "type": "Text",
                    "props": { "color": { "type": "theme", "value": "colors.primary.500" } }
                }]
            }]
        }))
        .unwrap();

        let compiled = compile(&doc, &tree(), CompileOptions::default()).unwrap();
        assert_eq!(
            compiled.content[0].children[0].props["color"],
            json!("#3b82f6")
        );
    }
}
