//! The theme record: identity plus its design-token tree.

use serde::{Deserialize, Serialize};
use tessera_tokens::TokenTree;
use tessera_types::ThemeId;

/// A theme: a token tree plus identity.
///
/// A blueprint theme is the shared, scope-agnostic record many tenants
/// activate; its placeholders provide the default region content each
/// activation materializes parts from. Whether the theme is *active* for a
/// given scope is not stored here; that is the activation manager's
/// single row per scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub id: ThemeId,
    pub name: String,
    pub tokens: TokenTree,
    /// Marks the shared blueprint record (as opposed to a scope-private
    /// theme that only one tenant ever activates).
    #[serde(default)]
    pub blueprint: bool,
}

impl Theme {
    pub fn new(id: impl Into<ThemeId>, name: impl Into<String>, tokens: TokenTree) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tokens,
            blueprint: false,
        }
    }

    pub fn blueprint(id: impl Into<ThemeId>, name: impl Into<String>, tokens: TokenTree) -> Self {
        Self {
            blueprint: true,
            ..Self::new(id, name, tokens)
        }
    }
}
