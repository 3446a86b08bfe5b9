//! Storage for the theme engine: blob persistence and the section store.
//!
//! The blob layer is the engine's only contact with physical storage, and
//! it is deliberately tiny: write a blob at a key, read it back, ask
//! whether it exists. Everything else (paths, versions, merge order) lives
//! above it.

pub mod blob;
pub mod error;
pub mod filesystem;
pub mod section;

pub use blob::{BlobStore, InMemoryBlobStore, SharedBlob};
pub use error::StoreError;
pub use filesystem::FilesystemBlobStore;
pub use section::{SaveOutcome, SectionKey, SectionRecord, SectionStore};
