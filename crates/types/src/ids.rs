//! Newtype wrappers for semantic IDs
//!
//! These types provide compile-time type safety to prevent mixing up
//! different kinds of identifiers (theme ids, template ids, blob keys, etc.).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// An identifier for a theme blueprint (e.g., for activation and publishing)
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ThemeId(Arc<str>);

impl ThemeId {
    /// Creates a new ThemeId from a string
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Returns the string representation of this theme ID
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ThemeId {
    fn from(s: String) -> Self {
        Self(s.into())
    }
}

impl From<&str> for ThemeId {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<Arc<str>> for ThemeId {
    fn from(s: Arc<str>) -> Self {
        Self(s)
    }
}

impl From<ThemeId> for String {
    fn from(id: ThemeId) -> Self {
        id.0.to_string()
    }
}

impl AsRef<str> for ThemeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A numeric identifier for a saved page template.
///
/// Template sections are merged into the master stylesheet sorted by this id,
/// so it is ordered as well as hashable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(u32);

impl TemplateId {
    /// Creates a new TemplateId
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value of this template ID
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for TemplateId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_id_creation() {
        let id1 = ThemeId::new("midnight");
        let id2 = ThemeId::from("midnight");
        let id3 = ThemeId::from(String::from("midnight"));

        assert_eq!(id1, id2);
        assert_eq!(id2, id3);
        assert_eq!(id1.as_str(), "midnight");
    }

    #[test]
    fn test_template_id_ordering() {
        let mut ids = vec![TemplateId::new(7), TemplateId::new(2), TemplateId::new(11)];
        ids.sort();
        assert_eq!(
            ids,
            vec![TemplateId::new(2), TemplateId::new(7), TemplateId::new(11)]
        );
    }

    #[test]
    fn test_hash_map_usage() {
        use std::collections::HashMap;

        let mut themes = HashMap::new();
        themes.insert(ThemeId::new("a"), 1);
        themes.insert(ThemeId::new("b"), 2);

        assert_eq!(themes.get(&ThemeId::new("a")), Some(&1));
    }
}
