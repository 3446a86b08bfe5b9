//! Per-region and per-template CSS rendering from compiled content.
//!
//! Generated rules come first, the scope's custom CSS last, so author
//! overrides always win the cascade.

use crate::error::CssError;
use crate::groups::NodeStyle;
use crate::naming::css_class;
use tessera_content::{ContentDocument, ContentNode};
use tessera_types::{Region, TemplateId};

/// Renders the CSS for a region section from the scope's compiled part
/// content, with the part's custom CSS (if any) appended after the
/// generated rules.
pub fn render_region_css(
    region: Region,
    document: &ContentDocument,
    custom_css: Option<&str>,
) -> Result<String, CssError> {
    render_scoped(&format!(".theme-{}", region.as_str()), document, custom_css)
}

/// Renders the CSS for a saved page template's preview section.
pub fn render_template_css(
    id: TemplateId,
    document: &ContentDocument,
) -> Result<String, CssError> {
    render_scoped(&format!(".template-{}", id), document, None)
}

fn render_scoped(
    scope_selector: &str,
    document: &ContentDocument,
    custom_css: Option<&str>,
) -> Result<String, CssError> {
    let mut rules: Vec<String> = Vec::new();
    visit(&document.content, scope_selector, &mut rules)?;

    let mut css = rules.join("\n");
    match custom_css.map(str::trim) {
        Some(custom) if !custom.is_empty() => {
            if !css.is_empty() {
                css.push('\n');
            }
            css.push_str(custom);
            css.push('\n');
        }
        _ => {}
    }
    Ok(css)
}

fn visit(
    nodes: &[ContentNode],
    scope_selector: &str,
    rules: &mut Vec<String>,
) -> Result<(), CssError> {
    for node in nodes {
        let style = NodeStyle::from_props(&node.props)?;
        if !style.is_empty() {
            let mut rule = format!("{} .{} {{\n", scope_selector, css_class(&node.node_type));
            for (property, value) in style.declarations() {
                rule.push_str("  ");
                rule.push_str(property);
                rule.push_str(": ");
                rule.push_str(&value);
                rule.push_str(";\n");
            }
            rule.push_str("}\n");
            rules.push(rule);
        }
        visit(&node.children, scope_selector, rules)?;
    }
    Ok(())
}
