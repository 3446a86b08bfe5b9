//! Structured content documents and the document compiler.
//!
//! A content document is a tree of nodes, each with a `type` and a `props`
//! map; the engine is agnostic to the specific node types the page builder
//! defines. Prop values may carry token references, and compilation replaces
//! those references with resolved literals while leaving the raw document
//! untouched for later recompilation.

pub mod compiler;
pub mod document;
pub mod error;
pub mod refs;

pub use compiler::{compile, CompileOptions, CompilePolicy, UNRESOLVED_MARKER_PREFIX};
pub use document::{ContentDocument, ContentNode};
pub use error::CompileError;
pub use refs::PropRef;
