//! The section store: independently regenerable CSS fragments per
//! `(theme, scope, section-name)`.
//!
//! Records are immutable once stored; a save replaces the whole record
//! behind the lock, so a concurrent publish snapshot sees either the old
//! record or the new one, never partially-updated bytes. Saving identical
//! bytes is a detected no-op, which is what makes change-based versioning
//! work: last-modified only moves when the CSS actually changed.

use crate::error::StoreError;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tessera_types::{Scope, SectionName, ThemeId};

/// Identifies one stored section.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct SectionKey {
    pub theme: ThemeId,
    pub scope: Scope,
    pub name: SectionName,
}

impl SectionKey {
    pub fn new(theme: ThemeId, scope: Scope, name: SectionName) -> Self {
        Self { theme, scope, name }
    }
}

/// One stored CSS fragment plus its change metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRecord {
    pub css: Arc<str>,
    /// Milliseconds since the epoch, bumped only on content change.
    pub last_modified: i64,
}

/// Result of a save: whether the section actually changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The submitted CSS was byte-identical to the stored CSS.
    Unchanged,
    /// The record was replaced; carries the new last-modified stamp.
    Updated { last_modified: i64 },
}

/// In-process store of generated sections for every theme and scope.
#[derive(Debug, Default)]
pub struct SectionStore {
    sections: RwLock<HashMap<SectionKey, Arc<SectionRecord>>>,
}

impl SectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saves a section, replacing the previous record as a whole.
    ///
    /// Byte-identical CSS is a no-op and does not advance last-modified.
    /// Stamps are `max(now, prev + 1)` so a real change always moves the
    /// stamp forward even when two saves land in the same millisecond.
    pub fn save(&self, key: SectionKey, css: &str) -> Result<SaveOutcome, StoreError> {
        let mut sections = self.sections.write().map_err(|_| StoreError::WriteFailed {
            key: format!("{}/{}/{}", key.theme, key.scope, key.name),
            message: "section store lock poisoned".to_string(),
        })?;

        if let Some(existing) = sections.get(&key) {
            if &*existing.css == css {
                log::debug!("section {} unchanged, keeping stamp {}", key.name, existing.last_modified);
                return Ok(SaveOutcome::Unchanged);
            }
        }

        let now = chrono::Utc::now().timestamp_millis();
        let last_modified = match sections.get(&key) {
            Some(existing) => now.max(existing.last_modified + 1),
            None => now,
        };

        sections.insert(
            key,
            Arc::new(SectionRecord {
                css: css.into(),
                last_modified,
            }),
        );
        Ok(SaveOutcome::Updated { last_modified })
    }

    /// Reads one section record.
    pub fn get(&self, key: &SectionKey) -> Option<Arc<SectionRecord>> {
        self.sections.read().ok()?.get(key).cloned()
    }

    /// Whether a section exists.
    pub fn contains(&self, key: &SectionKey) -> bool {
        self.sections
            .read()
            .map(|s| s.contains_key(key))
            .unwrap_or(false)
    }

    /// Consistent snapshot of all sections for `(theme, scope)`, in
    /// publish order.
    pub fn snapshot_for(&self, theme: &ThemeId, scope: &Scope) -> Vec<(SectionName, Arc<SectionRecord>)> {
        let Ok(sections) = self.sections.read() else {
            return Vec::new();
        };
        let mut matching: Vec<(SectionName, Arc<SectionRecord>)> = sections
            .iter()
            .filter(|(key, _)| &key.theme == theme && &key.scope == scope)
            .map(|(key, record)| (key.name, Arc::clone(record)))
            .collect();
        matching.sort_by_key(|(name, _)| name.publish_rank());
        matching
    }

    /// Removes every section for `(theme, scope)`. Used by explicit
    /// full-regenerate requests.
    pub fn clear_for(&self, theme: &ThemeId, scope: &Scope) {
        if let Ok(mut sections) = self.sections.write() {
            sections.retain(|key, _| !(&key.theme == theme && &key.scope == scope));
        }
    }

    /// Removes every section of a theme across all scopes. Used by theme
    /// deletion.
    pub fn clear_theme(&self, theme: &ThemeId) {
        if let Ok(mut sections) = self.sections.write() {
            sections.retain(|key, _| &key.theme != theme);
        }
    }
}
