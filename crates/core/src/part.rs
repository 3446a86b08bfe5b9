//! Parts: scope-specific, independently editable region content.

use serde::{Deserialize, Serialize};
use tessera_content::ContentDocument;
use tessera_types::{Region, Scope, ThemeId};

/// Identifies one part. Writes to distinct keys cannot conflict, which is
/// why header and footer edits of the same scope need no coordination.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct PartKey {
    pub theme: ThemeId,
    pub scope: Scope,
    pub region: Region,
}

impl PartKey {
    pub fn new(theme: ThemeId, scope: Scope, region: Region) -> Self {
        Self { theme, scope, region }
    }
}

/// The live, editable content of one region for one scope.
///
/// Created by activation from the blueprint placeholder; afterwards only
/// customization mutates it, always as a whole-record replacement. The raw
/// document keeps its token references so the part can be recompiled after
/// a token-tree edit without losing authoring intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Author-intent content, references intact.
    pub raw: ContentDocument,
    /// The compiled copy with references resolved to literals.
    pub compiled: ContentDocument,
    /// Free-form CSS the scope's author attached to this region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    /// Whether this part has been edited since activation materialized it.
    #[serde(default)]
    pub customized: bool,
}

impl Part {
    /// A freshly materialized part, identical to its placeholder default.
    pub fn materialized(raw: ContentDocument, compiled: ContentDocument) -> Self {
        Self {
            raw,
            compiled,
            custom_css: None,
            customized: false,
        }
    }
}
