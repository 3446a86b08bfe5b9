//! Structural regions and named stylesheet sections.

use crate::ids::TemplateId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A structural region of a page that carries its own editable content.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Header,
    Footer,
}

impl Region {
    /// All regions, in the order parts are materialized at activation.
    pub const ALL: [Region; 2] = [Region::Header, Region::Footer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Header => "header",
            Region::Footer => "footer",
        }
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "header" => Ok(Region::Header),
            "footer" => Ok(Region::Footer),
            other => Err(format!("Invalid region type: '{}'", other)),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The name of one independently regenerable CSS fragment.
///
/// The publish pipeline merges sections in a fixed order: `variables`,
/// `header`, `footer`, then templates sorted by id. `publish_rank` encodes
/// that order so callers can sort a snapshot without special-casing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SectionName {
    Variables,
    Header,
    Footer,
    Template(TemplateId),
}

impl SectionName {
    /// Sort key matching the fixed publish order.
    pub fn publish_rank(&self) -> (u8, u32) {
        match self {
            SectionName::Variables => (0, 0),
            SectionName::Header => (1, 0),
            SectionName::Footer => (2, 0),
            SectionName::Template(id) => (3, id.value()),
        }
    }
}

impl From<Region> for SectionName {
    fn from(region: Region) -> Self {
        match region {
            Region::Header => SectionName::Header,
            Region::Footer => SectionName::Footer,
        }
    }
}

impl FromStr for SectionName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "variables" => Ok(SectionName::Variables),
            "header" => Ok(SectionName::Header),
            "footer" => Ok(SectionName::Footer),
            other => {
                if let Some(id) = other.strip_prefix("template-") {
                    id.parse::<u32>()
                        .map(|n| SectionName::Template(TemplateId::new(n)))
                        .map_err(|_| format!("Invalid template section name: '{}'", other))
                } else {
                    Err(format!("Unknown section name: '{}'", other))
                }
            }
        }
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionName::Variables => f.write_str("variables"),
            SectionName::Header => f.write_str("header"),
            SectionName::Footer => f.write_str("footer"),
            SectionName::Template(id) => write!(f, "template-{}", id),
        }
    }
}
