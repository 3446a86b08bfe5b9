pub mod color;
pub mod ids;
pub mod region;
pub mod scope;

pub use color::Color;
pub use ids::{TemplateId, ThemeId};
pub use region::{Region, SectionName};
pub use scope::Scope;
