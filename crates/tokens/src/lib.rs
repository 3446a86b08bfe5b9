//! A pure, JSON-native design-token tree and dot-path resolver.
//!
//! This crate is the innermost layer of the engine: it knows nothing about
//! storage, scopes, or CSS. Resolution is a side-effect-free function over
//! plain data so the exact same code runs during server-side compilation and
//! inside the browser preview (via the wasm bindings), which is what makes
//! what-you-see-is-what-you-get editing trustworthy.

pub mod error;
pub mod path;
pub mod resolve;
pub mod tree;

pub use error::TokenError;
pub use path::TokenPath;
pub use resolve::{resolve, TokenRef};
pub use tree::TokenTree;
