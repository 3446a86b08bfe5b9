//! Customization scope: the shared/central context or a single tenant.
//!
//! Surrounding routing resolves the tenant before calling into the engine,
//! so a scope is always an already-resolved identifier here. On the wire it
//! is `null` for the central scope or the tenant id string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// A customization boundary for themes, parts, and published stylesheets.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Scope {
    /// The shared/central scope, used when no tenant applies.
    Central,
    /// A single tenant's scope.
    Tenant(Arc<str>),
}

impl Scope {
    /// Creates a tenant scope from an id string.
    pub fn tenant(id: impl Into<Arc<str>>) -> Self {
        Self::Tenant(id.into())
    }

    /// Returns `true` for the shared/central scope.
    pub fn is_central(&self) -> bool {
        matches!(self, Scope::Central)
    }

    /// Returns the filename prefix this scope contributes to master
    /// stylesheet paths: empty for central, `"<tenant>-"` for tenants.
    pub fn file_prefix(&self) -> String {
        match self {
            Scope::Central => String::new(),
            Scope::Tenant(id) => format!("{}-", id),
        }
    }
}

impl From<Option<String>> for Scope {
    fn from(value: Option<String>) -> Self {
        match value {
            None => Scope::Central,
            Some(id) => Scope::Tenant(id.into()),
        }
    }
}

impl From<Scope> for Option<String> {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Central => None,
            Scope::Tenant(id) => Some(id.to_string()),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Central => write!(f, "central"),
            Scope::Tenant(id) => write!(f, "{}", id),
        }
    }
}
