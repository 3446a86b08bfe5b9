//! Optional visual-style groups carried on content nodes.
//!
//! Each group (`spacing`, `border`, `shadow`, `alignment`) is an
//! independent optional value object with its own pure CSS-emission
//! function; [`NodeStyle`] composes whichever groups a node carries by
//! simple merge. Values here come from *compiled* content, so colors and
//! lengths are literal strings, never token references.

use crate::error::CssError;
use crate::parsers::{CssLength, Edges};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tessera_types::Color;

/// One emitted CSS declaration: `(property, value)`.
pub type Declaration = (&'static str, String);

/// Outer/inner spacing for a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SpacingGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Edges>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Edges>,
}

impl SpacingGroup {
    pub fn declarations(&self) -> Vec<Declaration> {
        let mut out = Vec::new();
        if let Some(margin) = &self.margin {
            out.push(("margin", margin.to_string()));
        }
        if let Some(padding) = &self.padding {
            out.push(("padding", padding.to_string()));
        }
        out
    }
}

/// Border line styles the page builder exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderLineStyle {
    Solid,
    Dashed,
    Dotted,
    Double,
    None,
}

impl BorderLineStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            BorderLineStyle::Solid => "solid",
            BorderLineStyle::Dashed => "dashed",
            BorderLineStyle::Dotted => "dotted",
            BorderLineStyle::Double => "double",
            BorderLineStyle::None => "none",
        }
    }
}

/// Border and corner rounding for a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BorderGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<CssLength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<BorderLineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<CssLength>,
}

impl BorderGroup {
    pub fn declarations(&self) -> Vec<Declaration> {
        let mut out = Vec::new();
        let edge: Vec<String> = [
            self.width.map(|w| w.to_string()),
            self.style.map(|s| s.as_str().to_string()),
            self.color.as_ref().map(Color::to_css_string),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !edge.is_empty() {
            out.push(("border", edge.join(" ")));
        }
        if let Some(radius) = &self.radius {
            out.push(("border-radius", radius.to_string()));
        }
        out
    }
}

/// A single box shadow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShadowGroup {
    #[serde(default)]
    pub x: Option<CssLength>,
    #[serde(default)]
    pub y: Option<CssLength>,
    #[serde(default)]
    pub blur: Option<CssLength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spread: Option<CssLength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl ShadowGroup {
    pub fn declarations(&self) -> Vec<Declaration> {
        let zero = CssLength { value: 0.0, unit: None };
        let mut parts = vec![
            self.x.unwrap_or(zero).to_string(),
            self.y.unwrap_or(zero).to_string(),
            self.blur.unwrap_or(zero).to_string(),
        ];
        if let Some(spread) = self.spread {
            parts.push(spread.to_string());
        }
        if let Some(color) = &self.color {
            parts.push(color.to_css_string());
        }
        vec![("box-shadow", parts.join(" "))]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
    Justify,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Content alignment within a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AlignmentGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<HorizontalAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical: Option<VerticalAlign>,
}

impl AlignmentGroup {
    pub fn declarations(&self) -> Vec<Declaration> {
        let mut out = Vec::new();
        if let Some(horizontal) = self.horizontal {
            let value = match horizontal {
                HorizontalAlign::Left => "left",
                HorizontalAlign::Center => "center",
                HorizontalAlign::Right => "right",
                HorizontalAlign::Justify => "justify",
            };
            out.push(("text-align", value.to_string()));
        }
        if let Some(vertical) = self.vertical {
            let value = match vertical {
                VerticalAlign::Top => "top",
                VerticalAlign::Middle => "middle",
                VerticalAlign::Bottom => "bottom",
            };
            out.push(("vertical-align", value.to_string()));
        }
        out
    }
}

/// The merged style of one content node: whichever groups its props carry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeStyle {
    pub spacing: Option<SpacingGroup>,
    pub border: Option<BorderGroup>,
    pub shadow: Option<ShadowGroup>,
    pub alignment: Option<AlignmentGroup>,
}

impl NodeStyle {
    /// Extracts the style groups from a compiled node's props. Absent keys
    /// are simply absent groups; present-but-malformed keys are errors.
    pub fn from_props(props: &Map<String, Value>) -> Result<Self, CssError> {
        Ok(Self {
            spacing: parse_group(props, "spacing")?,
            border: parse_group(props, "border")?,
            shadow: parse_group(props, "shadow")?,
            alignment: parse_group(props, "alignment")?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.spacing.is_none()
            && self.border.is_none()
            && self.shadow.is_none()
            && self.alignment.is_none()
    }

    /// All declarations, merged in a fixed group order.
    pub fn declarations(&self) -> Vec<Declaration> {
        let spacing = self.spacing.iter().flat_map(SpacingGroup::declarations);
        let border = self.border.iter().flat_map(BorderGroup::declarations);
        let shadow = self.shadow.iter().flat_map(ShadowGroup::declarations);
        let alignment = self.alignment.iter().flat_map(AlignmentGroup::declarations);
        spacing.chain(border).chain(shadow).chain(alignment).collect_vec()
    }
}

fn parse_group<T: serde::de::DeserializeOwned>(
    props: &Map<String, Value>,
    key: &str,
) -> Result<Option<T>, CssError> {
    match props.get(key) {
        None => Ok(None),
        Some(value) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| CssError::InvalidValue {
                property: key.to_string(),
                value: format!("{} ({})", value, e),
            }),
    }
}
