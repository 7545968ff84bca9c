//! `<length>` and `<length-percentage>` values per
//! [§ 6.1 Distance Units](https://www.w3.org/TR/css-values-4/#lengths).
//!
//! This engine round-trips text rather than resolving to pixels, so a
//! length keeps its unit as written instead of collapsing to a float.

use serde::Serialize;

use crate::catalog;
use crate::error::{ValueError, ValueResult};
use crate::node::Node;
use crate::values::number::fmt_number;

/// A length with its unit preserved.
///
/// "Lengths refer to distance measurements and are denoted by `<length>` in
/// the property definitions."
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Length {
    /// The numeric value.
    pub value: f64,
    /// The unit, in canonical (lowercase) spelling.
    pub unit: String,
}

impl Length {
    /// Create a length from a value and unit.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// The zero length, carrying the default unit.
    ///
    /// [§ 6.1](https://www.w3.org/TR/css-values-4/#lengths):
    /// "for zero lengths the unit identifier is optional" — contexts in this
    /// crate that require a unit give an unadorned `0` the `px` default.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0.0, "px")
    }

    /// Canonical text form.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("{}{}", fmt_number(self.value), self.unit)
    }
}

/// [§ 6.4 `<length-percentage>`](https://www.w3.org/TR/css-values-4/#typedef-length-percentage)
///
/// "Where `<length-percentage>` is used, it represents a value that can be
/// either a `<length>` or a `<percentage>`."
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LengthPercentage {
    /// A length with a unit.
    Length(Length),
    /// A percentage (50.0 for `50%`).
    Percentage(f64),
}

impl LengthPercentage {
    /// Canonical text form.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Length(length) => length.to_css(),
            Self::Percentage(value) => format!("{}%", fmt_number(*value)),
        }
    }
}

impl From<Length> for LengthPercentage {
    fn from(length: Length) -> Self {
        Self::Length(length)
    }
}

/// Parse one node as a `<length>`.
///
/// An unadorned `0` is accepted as a zero length with the `px` default
/// unit; any other bare number has no unit to carry and is rejected.
///
/// # Errors
///
/// Returns a syntax issue for an unknown unit or a non-length node.
pub fn parse_length(node: &Node) -> ValueResult<Length> {
    match node {
        Node::Dimension { value, unit } => catalog::canonical_keyword(catalog::LENGTH_UNITS, unit)
            .map_or_else(
                || Err(ValueError::syntax("a length unit", node.describe()).into()),
                |unit| Ok(Length::new(*value, unit)),
            ),
        Node::Number(value) if *value == 0.0 => Ok(Length::zero()),
        other => Err(ValueError::syntax("a length", other.describe()).into()),
    }
}

/// Parse one node as a `<length-percentage>`.
///
/// # Errors
///
/// Returns a syntax issue for anything that is neither a length nor a
/// percentage.
pub fn parse_length_percentage(node: &Node) -> ValueResult<LengthPercentage> {
    match node {
        Node::Percentage(value) => Ok(LengthPercentage::Percentage(*value)),
        Node::Dimension { .. } | Node::Number(_) => {
            Ok(LengthPercentage::Length(parse_length(node)?))
        }
        other => Err(ValueError::syntax("a length or percentage", other.describe()).into()),
    }
}

/// Is this node parseable as a `<length-percentage>`?
#[must_use]
pub fn is_length_percentage_node(node: &Node) -> bool {
    match node {
        Node::Percentage(_) => true,
        Node::Number(value) => *value == 0.0,
        Node::Dimension { unit, .. } => catalog::is_length_unit(unit),
        _ => false,
    }
}
