//! Color stop lists.
//!
//! [§ 3.4.1](https://www.w3.org/TR/css-images-3/#color-stop-syntax):
//! "A color-stop is a combination of a color and a position."
//!
//! Each comma group is one stop: the color first, then an optional
//! position. Linear and radial gradients position stops along a length,
//! conic gradients around an angle, so the owning grammar passes its
//! position kind down.

use serde::Serialize;

use crate::catalog;
use crate::color::Color;
use crate::error::{ValueError, ValueResult};
use crate::node::Node;
use crate::values::angle::{self, Angle};
use crate::values::length::{self, LengthPercentage};

/// Where along the gradient line (or arc) a stop sits.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StopPosition {
    /// A length or percentage along the gradient line.
    LengthPercentage(LengthPercentage),
    /// An angle around the conic arc.
    Angle(Angle),
}

impl StopPosition {
    /// Canonical text form.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::LengthPercentage(value) => value.to_css(),
            Self::Angle(value) => value.to_css(),
        }
    }
}

/// One color stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorStop {
    /// The stop's color.
    pub color: Color,
    /// The stop's explicit position, if one was written.
    pub position: Option<StopPosition>,
}

impl ColorStop {
    /// Canonical text form: the color, then the position if present.
    #[must_use]
    pub fn to_css(&self) -> String {
        match &self.position {
            Some(position) => format!("{} {}", self.color.to_css(), position.to_css()),
            None => self.color.to_css(),
        }
    }
}

/// How the owning gradient types a stop position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum StopPositionKind {
    /// Linear and radial gradients: `<length-percentage>`.
    LengthPercentage,
    /// Conic gradients: `<angle>` or `<length-percentage>`; a bare number
    /// is an angle in degrees.
    AngleOrLengthPercentage,
}

/// Parse the comma groups of a stop list.
///
/// # Errors
///
/// Returns an arity issue for a group of 3+ nodes, a structural issue when
/// fewer than 2 stops are present, and per-node issues otherwise.
pub(super) fn parse_color_stops(
    groups: &[&[Node]],
    kind: StopPositionKind,
) -> ValueResult<Vec<ColorStop>> {
    let mut stops = Vec::with_capacity(groups.len());
    for group in groups {
        stops.push(parse_stop(group, kind)?);
    }

    if stops.len() < 2 {
        return Err(ValueError::structural(format!(
            "a gradient requires at least 2 color stops, found {}",
            stops.len()
        ))
        .into());
    }
    Ok(stops)
}

/// Parse one comma group as a stop.
fn parse_stop(group: &[Node], kind: StopPositionKind) -> ValueResult<ColorStop> {
    match group {
        [color] => Ok(ColorStop {
            color: Color::from_node(color)?,
            position: None,
        }),
        [color, position] => Ok(ColorStop {
            color: Color::from_node(color)?,
            position: Some(parse_stop_position(position, kind)?),
        }),
        nodes => Err(ValueError::Arity {
            slot: "color stop",
            expected: "a color and at most one position",
            found: nodes.len(),
        }
        .into()),
    }
}

/// Parse a stop's position node according to the owning gradient's kind.
fn parse_stop_position(node: &Node, kind: StopPositionKind) -> ValueResult<StopPosition> {
    match kind {
        StopPositionKind::LengthPercentage => Ok(StopPosition::LengthPercentage(
            length::parse_length_percentage(node)?,
        )),
        StopPositionKind::AngleOrLengthPercentage => match node {
            Node::Percentage(value) => Ok(StopPosition::LengthPercentage(
                LengthPercentage::Percentage(*value),
            )),
            Node::Dimension { unit, .. } if catalog::is_length_unit(unit) => Ok(
                StopPosition::LengthPercentage(length::parse_length_percentage(node)?),
            ),
            Node::Number(_) | Node::Dimension { .. } => {
                Ok(StopPosition::Angle(angle::parse_angle(node)?))
            }
            other => Err(ValueError::syntax(
                "an angle, length, or percentage stop position",
                other.describe(),
            )
            .into()),
        },
    }
}
