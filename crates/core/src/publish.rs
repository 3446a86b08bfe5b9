//! The publish pipeline: section validation, fixed-order merge, and the
//! versioned master stylesheet.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tessera_store::SectionRecord;
use tessera_types::{Scope, SectionName, ThemeId};

/// The sections every scope must have before it can publish.
pub const REQUIRED_SECTIONS: [SectionName; 3] = [
    SectionName::Variables,
    SectionName::Header,
    SectionName::Footer,
];

/// Result of a publish pre-check.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishValidation {
    pub valid: bool,
    pub missing: Vec<SectionName>,
}

/// Metadata of one published master stylesheet. `css_url` and the version
/// are pure reads over this record; they never recompute CSS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublishRecord {
    /// Blob key of the master stylesheet.
    pub path: String,
    /// Max last-modified across the sections that went into the merge.
    pub version: i64,
}

impl PublishRecord {
    /// The cache-busted URL the renderer and editor fetch.
    pub fn css_url(&self) -> String {
        format!("{}?v={}", self.path, self.version)
    }
}

/// Which required sections are absent from a snapshot.
pub fn missing_sections(snapshot: &[(SectionName, Arc<SectionRecord>)]) -> Vec<SectionName> {
    REQUIRED_SECTIONS
        .iter()
        .filter(|required| !snapshot.iter().any(|(name, _)| name == *required))
        .copied()
        .collect()
}

/// Concatenates a snapshot (already in publish order: variables, header,
/// footer, templates by id) into the master stylesheet and derives its
/// version as the max last-modified among contributing sections.
pub fn merge_sections(snapshot: &[(SectionName, Arc<SectionRecord>)]) -> (String, i64) {
    let css = snapshot
        .iter()
        .map(|(name, record)| format!("/* section: {} */\n{}", name, record.css.trim_end()))
        .join("\n\n");

    let version = snapshot
        .iter()
        .map(|(_, record)| record.last_modified)
        .max()
        .unwrap_or(0);

    (css + "\n", version)
}

/// The blob key of a scope's master stylesheet:
/// `<public-prefix>/themes/<scope-prefix><theme-id>.css`.
pub fn master_path(public_prefix: &str, theme: &ThemeId, scope: &Scope) -> String {
    format!(
        "{}/themes/{}{}.css",
        public_prefix.trim_end_matches('/'),
        scope.file_prefix(),
        theme
    )
}
