//! CSS generation: token trees to custom properties, compiled content to
//! per-region rules.
//!
//! Everything here is a pure function from plain data to CSS text. The
//! variable generator walks the token tree in its own insertion order, so
//! identical input yields byte-identical output; that determinism is what
//! the section store's no-op detection and diff-based cache invalidation
//! stand on.

pub mod error;
pub mod groups;
pub mod naming;
pub mod parsers;
pub mod region;
pub mod value;
pub mod vars;

pub use error::CssError;
pub use groups::{
    AlignmentGroup, BorderGroup, Declaration, NodeStyle, ShadowGroup, SpacingGroup,
};
pub use parsers::{CssLength, Edges, LengthUnit};
pub use region::{render_region_css, render_template_css};
pub use vars::generate;
