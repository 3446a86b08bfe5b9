//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use serde_json::json;
use std::sync::Arc;
use tessera::prelude::*;

/// A representative token tree: base palette, typography, spacing, radii,
/// and one component default block.
pub fn sample_tokens() -> TokenTree {
    TokenTree::from_value(json!({
        "colors": {
            "primary": { "500": "#3b82f6", "900": "#1e3a8a" },
            "surface": { "default": "#ffffff" }
        },
        "typography": {
            "fontFamily": { "heading": ["Inter", "sans-serif"], "body": ["Inter", "sans-serif"] },
            "fontSize": { "base": "1rem", "lg": "1.125rem" }
        },
        "spacing": { "2": "0.5rem", "4": "1rem" },
        "borderRadius": { "md": "0.375rem" },
        "components": {
            "button": {
                "primary": {
                    "backgroundColor": { "type": "theme", "value": "colors.primary.500" },
                    "borderRadius": { "type": "theme", "value": "borderRadius.md" }
                }
            }
        }
    }))
    .unwrap()
}

pub fn header_placeholder() -> ContentDocument {
    serde_json::from_value(json!({
        "root": "header",
        "content": [{
            "type": "NavBar",
            "props": {
                "backgroundColor": { "type": "theme", "value": "colors.primary.500" },
                "spacing": { "padding": "12px 24px" }
            }
        }]
    }))
    .unwrap()
}

pub fn footer_placeholder() -> ContentDocument {
    serde_json::from_value(json!({
        "root": "footer",
        "content": [{
            "type": "FooterLinks",
            "props": {
                "color": { "type": "theme", "value": "colors.primary.900" },
                "spacing": { "margin": "16px" }
            }
        }]
    }))
    .unwrap()
}

/// A customized header document, clearly different from the placeholder.
pub fn customized_header() -> ContentDocument {
    serde_json::from_value(json!({
        "root": "header",
        "content": [{
            "type": "NavBar",
            "props": {
                "backgroundColor": { "type": "custom", "value": "#111111" },
                "border": { "width": "2px", "style": "dashed", "color": "#ff00ff" }
            }
        }]
    }))
    .unwrap()
}

/// An engine seeded with one blueprint theme and both placeholders.
pub fn seeded_engine(theme_id: &str) -> ThemeEngine {
    let engine = ThemeEngine::new(Arc::new(InMemoryBlobStore::new()));
    engine
        .create_theme(Theme::blueprint(theme_id, "Test Theme", sample_tokens()))
        .unwrap();
    engine
        .set_placeholder(&ThemeId::new(theme_id), Region::Header, header_placeholder())
        .unwrap();
    engine
        .set_placeholder(&ThemeId::new(theme_id), Region::Footer, footer_placeholder())
        .unwrap();
    engine
}
