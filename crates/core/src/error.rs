//! The unified error taxonomy for all engine operations.
//!
//! No failure here is process-fatal; every error is scoped to the single
//! operation that raised it.

use tessera_content::CompileError;
use tessera_css::CssError;
use tessera_store::StoreError;
use tessera_tokens::TokenError;
use tessera_types::{Scope, ThemeId};
use thiserror::Error;

/// The main error enum for all high-level engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Malformed input: bad token reference, unknown section name, invalid
    /// region type, and similar shape problems.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The referenced theme does not exist in the registry.
    #[error("Theme not found: '{theme}'")]
    ThemeNotFound { theme: ThemeId },

    /// Customization attempted before the theme was activated for the
    /// scope. Surfaced distinctly so callers can prompt "activate first".
    #[error("Theme '{theme}' has not been activated for scope '{scope}'")]
    NotActivated { theme: ThemeId, scope: Scope },

    /// Publish attempted while required sections are missing. Carries the
    /// exact list of missing names.
    #[error("Cannot publish: missing required sections {missing:?}")]
    IncompleteSections { missing: Vec<String> },

    /// Delete attempted while the theme is active for at least one scope.
    #[error("Theme '{theme}' is active and cannot be deleted")]
    ThemeInUse { theme: ThemeId },

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("Document compile error: {0}")]
    Compile(#[from] CompileError),

    #[error("CSS generation error: {0}")]
    Css(#[from] CssError),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    /// A poisoned lock or similar broken internal invariant.
    #[error("Internal state error: {0}")]
    Internal(String),
}
