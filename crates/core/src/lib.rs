//! # tessera-core
//!
//! The integration layer of the theme engine. It wires the pure algorithm
//! crates (token resolution, document compilation, CSS generation) to the
//! storage layer and owns the stateful contracts:
//!
//! - **theme**: the theme record (token tree + blueprint flag) and its
//!   placeholder defaults
//! - **part**: scope-specific, independently editable region content
//! - **engine**: the scope & activation manager and the facade API
//! - **publish**: section validation, fixed-order merge, versioned output
//! - **error**: the unified error taxonomy for all engine operations
//!
//! Every mutating operation assumes the caller already holds a
//! manage-level capability; the engine performs no authorization itself.

// Re-export foundation crates
pub use tessera_content as content;
pub use tessera_css as css;
pub use tessera_store as store;
pub use tessera_tokens as tokens;
pub use tessera_types as types;

pub mod engine;
pub mod error;
pub mod part;
pub mod publish;
pub mod theme;

// Re-export commonly used types from foundation crates
pub use tessera_content::{compile, CompileOptions, CompilePolicy, ContentDocument, ContentNode};
pub use tessera_css::generate;
pub use tessera_store::{BlobStore, FilesystemBlobStore, InMemoryBlobStore};
pub use tessera_tokens::{resolve, TokenPath, TokenRef, TokenTree};
pub use tessera_types::{Region, Scope, SectionName, TemplateId, ThemeId};

// Re-export from internal modules
pub use engine::{Customization, CustomizeRequest, EngineConfig, RegionCustomization, ThemeEngine};
pub use error::EngineError;
pub use part::{Part, PartKey};
pub use publish::{PublishRecord, PublishValidation};
pub use theme::Theme;
