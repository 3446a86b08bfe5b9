//! Low-level nom parser functions for CSS-like style values.
//!
//! Prop values arrive from the editor as strings ("12px", "0.5rem",
//! "8px 16px") or bare numbers. These composable parsers turn them into
//! typed values that re-emit in a single normalized form.

use crate::error::CssError;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while1};
use nom::character::complete::{char, space0, space1};
use nom::combinator::{all_consuming, map, map_res, opt, recognize};
use nom::multi::separated_list1;
use nom::sequence::delimited;
use nom::{IResult, Parser};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A CSS length unit. `None` on a [`CssLength`] means a unitless number
/// (valid for `line-height` and for zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Px,
    Rem,
    Em,
    Pt,
    Percent,
}

impl LengthUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthUnit::Px => "px",
            LengthUnit::Rem => "rem",
            LengthUnit::Em => "em",
            LengthUnit::Pt => "pt",
            LengthUnit::Percent => "%",
        }
    }
}

/// A parsed CSS length value, e.g. `12px` or `0.375rem`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CssLength {
    pub value: f32,
    pub unit: Option<LengthUnit>,
}

impl CssLength {
    pub fn px(value: f32) -> Self {
        Self {
            value,
            unit: Some(LengthUnit::Px),
        }
    }

    /// Parses a complete length string, rejecting trailing garbage.
    pub fn parse(input: &str) -> Result<Self, CssError> {
        match all_consuming(delimited(space0, parse_length, space0)).parse(input) {
            Ok((_, length)) => Ok(length),
            Err(_) => Err(CssError::Parse(format!(
                "Failed to parse length value: '{}'",
                input
            ))),
        }
    }
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_f32(self.value))?;
        if let Some(unit) = self.unit {
            f.write_str(unit.as_str())?;
        }
        Ok(())
    }
}

impl Serialize for CssLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CssLength {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(f32),
            Str(String),
        }

        match Raw::deserialize(deserializer)? {
            // Bare numbers are pixel counts by page-builder convention.
            Raw::Num(value) => Ok(CssLength::px(value)),
            Raw::Str(s) => CssLength::parse(&s).map_err(de::Error::custom),
        }
    }
}

/// Per-edge lengths produced by 1/2/4-value shorthand strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edges {
    pub top: CssLength,
    pub right: CssLength,
    pub bottom: CssLength,
    pub left: CssLength,
}

impl Edges {
    pub fn uniform(length: CssLength) -> Self {
        Self {
            top: length,
            right: length,
            bottom: length,
            left: length,
        }
    }

    /// Parses CSS shorthand (1, 2, or 4 values).
    pub fn parse_shorthand(input: &str) -> Result<Self, CssError> {
        let parts_res = all_consuming(separated_list1(space1, parse_length)).parse(input.trim());

        match parts_res {
            Ok((_, parts)) => match parts.len() {
                1 => Ok(Edges::uniform(parts[0])),
                2 => Ok(Edges {
                    top: parts[0],
                    right: parts[1],
                    bottom: parts[0],
                    left: parts[1],
                }),
                4 => Ok(Edges {
                    top: parts[0],
                    right: parts[1],
                    bottom: parts[2],
                    left: parts[3],
                }),
                n => Err(CssError::Parse(format!(
                    "Invalid number of values for spacing shorthand: got {}, expected 1, 2, or 4.",
                    n
                ))),
            },
            _ => Err(CssError::Parse(format!(
                "Failed to parse spacing value: '{}'",
                input
            ))),
        }
    }
}

impl fmt::Display for Edges {
    /// Emits the shortest equivalent shorthand.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.top == self.right && self.top == self.bottom && self.top == self.left {
            write!(f, "{}", self.top)
        } else if self.top == self.bottom && self.left == self.right {
            write!(f, "{} {}", self.top, self.right)
        } else {
            write!(f, "{} {} {} {}", self.top, self.right, self.bottom, self.left)
        }
    }
}

impl Serialize for Edges {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Edges {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(f32),
            Str(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(value) => Ok(Edges::uniform(CssLength::px(value))),
            Raw::Str(s) => Edges::parse_shorthand(&s).map_err(de::Error::custom),
        }
    }
}

// --- Helper Parsers ---

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((
                    take_while1(|c: char| c.is_ascii_digit()),
                    opt((char('.'), take_while1(|c: char| c.is_ascii_digit()))),
                )),
                recognize((char('.'), take_while1(|c: char| c.is_ascii_digit()))),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

fn parse_unit(input: &str) -> IResult<&str, LengthUnit> {
    alt((
        map(tag_no_case("px"), |_| LengthUnit::Px),
        // "rem" must match before "em".
        map(tag_no_case("rem"), |_| LengthUnit::Rem),
        map(tag_no_case("em"), |_| LengthUnit::Em),
        map(tag_no_case("pt"), |_| LengthUnit::Pt),
        map(char('%'), |_| LengthUnit::Percent),
    ))
    .parse(input)
}

/// Parses a length value with optional unit (e.g. "12px", "1.5rem", "50%").
pub fn parse_length(input: &str) -> IResult<&str, CssLength> {
    map((parse_f32, opt(parse_unit)), |(value, unit)| CssLength {
        value,
        unit,
    })
    .parse(input)
}

/// Float formatting without a trailing `.0`, for byte-stable output.
pub(crate) fn format_f32(value: f32) -> String {
    if value.fract() == 0.0 && value.abs() < 1e9 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lengths() {
        assert_eq!(CssLength::parse("12px").unwrap(), CssLength::px(12.0));
        assert_eq!(
            CssLength::parse("1.5rem").unwrap(),
            CssLength {
                value: 1.5,
                unit: Some(LengthUnit::Rem)
            }
        );
        assert_eq!(
            CssLength::parse("50%").unwrap(),
            CssLength {
                value: 50.0,
                unit: Some(LengthUnit::Percent)
            }
        );
        assert_eq!(
            CssLength::parse("0").unwrap(),
            CssLength {
                value: 0.0,
                unit: None
            }
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(CssLength::parse("12 px").is_err());
        assert!(CssLength::parse("abc").is_err());
        assert!(CssLength::parse("12quack").is_err());
    }

    #[test]
    fn test_length_display_normalizes() {
        assert_eq!(CssLength::parse("12.0px").unwrap().to_string(), "12px");
        assert_eq!(CssLength::parse("1.5rem").unwrap().to_string(), "1.5rem");
    }

    #[test]
    fn test_shorthand_one_value() {
        let edges = Edges::parse_shorthand("8px").unwrap();
        assert_eq!(edges, Edges::uniform(CssLength::px(8.0)));
        assert_eq!(edges.to_string(), "8px");
    }

    #[test]
    fn test_shorthand_two_values() {
        let edges = Edges::parse_shorthand("8px 16px").unwrap();
        assert_eq!(edges.top, CssLength::px(8.0));
        assert_eq!(edges.left, CssLength::px(16.0));
        assert_eq!(edges.to_string(), "8px 16px");
    }

    #[test]
    fn test_shorthand_four_values() {
        let edges = Edges::parse_shorthand("1px 2px 3px 4px").unwrap();
        assert_eq!(edges.to_string(), "1px 2px 3px 4px");
    }

    #[test]
    fn test_shorthand_three_values_rejected() {
        assert!(Edges::parse_shorthand("1px 2px 3px").is_err());
    }

    #[test]
    fn test_deserialize_number_is_px() {
        let length: CssLength = serde_json::from_str("12").unwrap();
        assert_eq!(length, CssLength::px(12.0));

        let edges: Edges = serde_json::from_str("\"4px 8px\"").unwrap();
        assert_eq!(edges.to_string(), "4px 8px");
    }
}
