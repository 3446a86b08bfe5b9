//! # Tessera
//!
//! A theme token resolution and CSS composition engine for multi-tenant
//! CMS deployments. It turns nested design-token trees into flat CSS
//! custom properties, resolves token references inside structured content
//! documents, keeps independently versioned CSS sections per scope, and
//! publishes a merged, cache-busted master stylesheet per customization
//! scope.
//!
//! ## Crates
//!
//! - `tessera-types`: ids, scopes, regions, section names, colors
//! - `tessera-tokens`: the token tree and the pure dot-path resolver
//! - `tessera-content`: content documents and the document compiler
//! - `tessera-css`: variable generation and region/template CSS rendering
//! - `tessera-store`: blob stores and the section store
//! - `tessera-core`: theme lifecycle, activation, publishing
//! - `tessera-wasm`: the same resolver/compiler exported to the editor
//!
//! ## Quick start
//!
//! ```
//! use std::sync::Arc;
//! use tessera::prelude::*;
//! use serde_json::json;
//!
//! let engine = ThemeEngine::new(Arc::new(InMemoryBlobStore::new()));
//! let tokens = TokenTree::from_value(json!({
//!     "colors": { "primary": { "500": "#3b82f6" } }
//! })).unwrap();
//!
//! engine.create_theme(Theme::blueprint("base", "Base", tokens)).unwrap();
//! engine.activate(&ThemeId::new("base"), &Scope::tenant("tenant-7")).unwrap();
//! let published = engine.publish(&ThemeId::new("base"), &Scope::tenant("tenant-7")).unwrap();
//! assert!(published.css_url().starts_with("public/themes/tenant-7-base.css?v="));
//! ```

pub use tessera_content as content;
pub use tessera_core as core;
pub use tessera_css as css;
pub use tessera_store as store;
pub use tessera_tokens as tokens;
pub use tessera_types as types;

// The facade API collaborators consume.
pub use tessera_content::{compile, CompileOptions, CompilePolicy, ContentDocument, ContentNode};
pub use tessera_core::{
    Customization, CustomizeRequest, EngineConfig, EngineError, Part, PublishRecord,
    PublishValidation, Theme, ThemeEngine,
};
pub use tessera_css::generate;
pub use tessera_store::{BlobStore, FilesystemBlobStore, InMemoryBlobStore};
pub use tessera_tokens::{resolve, TokenPath, TokenRef, TokenTree};
pub use tessera_types::{Color, Region, Scope, SectionName, TemplateId, ThemeId};

pub mod prelude {
    //! Convenient re-exports of commonly used items

    pub use crate::{
        compile, generate, resolve, CompileOptions, CompilePolicy, ContentDocument, ContentNode,
        CustomizeRequest, EngineConfig, EngineError, FilesystemBlobStore, InMemoryBlobStore,
        Region, Scope, SectionName, TemplateId, Theme, ThemeEngine, ThemeId, TokenPath, TokenRef,
        TokenTree,
    };
}
