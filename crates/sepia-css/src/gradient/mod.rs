//! Gradient values per [CSS Images Module Level 3 § 3](https://www.w3.org/TR/css-images-3/#gradients).
//!
//! "A gradient is an image that smoothly fades from one color to another."
//!
//! The three gradient functions share one shape: a run of optional,
//! keyword-disambiguated clauses (direction, shape, size, position,
//! interpolation space), then a comma, then a comma-separated list of at
//! least two color stops. Each dispatcher consumes its clauses in a fixed
//! order with no backtracking, since every clause is recognizable from its
//! leading token.

mod conic;
mod generate;
mod linear;
mod radial;
mod stops;

use serde::Serialize;
use strum_macros::Display;

use crate::catalog;
use crate::cursor::ArgCursor;
use crate::error::{ValueError, ValueResult};
use crate::node::{self, Node};
use crate::values::position;
use crate::values::{Angle, Position, RadialSize};

pub use stops::{ColorStop, StopPosition};

/// A horizontal side keyword of a `to <side-or-corner>` direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum HorizontalSide {
    /// Toward the left edge.
    Left,
    /// Toward the right edge.
    Right,
}

/// A vertical side keyword of a `to <side-or-corner>` direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum VerticalSide {
    /// Toward the top edge.
    Top,
    /// Toward the bottom edge.
    Bottom,
}

/// [§ 3.1](https://www.w3.org/TR/css-images-3/#linear-gradient-syntax)
/// `<angle> | to <side-or-corner>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LineDirection {
    /// An explicit gradient line angle.
    Angle(Angle),
    /// A side or corner; at least one axis is always present.
    Side {
        /// The horizontal component of the target side or corner.
        horizontal: Option<HorizontalSide>,
        /// The vertical component of the target side or corner.
        vertical: Option<VerticalSide>,
    },
}

/// The ending shape of a radial gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Shape {
    /// A circular ending shape.
    Circle,
    /// An elliptical ending shape.
    Ellipse,
}

/// A parsed `linear-gradient()` / `repeating-linear-gradient()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGradient {
    /// The gradient line direction; `None` means the `to bottom` default.
    pub direction: Option<LineDirection>,
    /// The `in <color-space>` interpolation clause, canonical spelling.
    pub color_space: Option<String>,
    /// The color stops, at least two.
    pub stops: Vec<ColorStop>,
    /// Whether the `repeating-` form was used.
    pub repeating: bool,
}

/// A parsed `radial-gradient()` / `repeating-radial-gradient()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialGradient {
    /// The explicit ending shape keyword, if any.
    pub shape: Option<Shape>,
    /// The explicit size, if any.
    pub size: Option<RadialSize>,
    /// The `at <position>` clause, if any.
    pub position: Option<Position>,
    /// The `in <color-space>` interpolation clause, canonical spelling.
    pub color_space: Option<String>,
    /// The color stops, at least two.
    pub stops: Vec<ColorStop>,
    /// Whether the `repeating-` form was used.
    pub repeating: bool,
}

/// A parsed `conic-gradient()` / `repeating-conic-gradient()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConicGradient {
    /// The `from <angle>` rotation clause, if any.
    pub from_angle: Option<Angle>,
    /// The `at <position>` clause, if any.
    pub position: Option<Position>,
    /// The `in <color-space>` interpolation clause, canonical spelling.
    pub color_space: Option<String>,
    /// The color stops, at least two.
    pub stops: Vec<ColorStop>,
    /// Whether the `repeating-` form was used.
    pub repeating: bool,
}

/// Any parsed gradient.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Gradient {
    /// `linear-gradient()` and its repeating form.
    Linear(LinearGradient),
    /// `radial-gradient()` and its repeating form.
    Radial(RadialGradient),
    /// `conic-gradient()` and its repeating form.
    Conic(ConicGradient),
}

impl Gradient {
    /// Parse one gradient value from text.
    ///
    /// # Errors
    ///
    /// Returns the issues of the underlying parse, or an arity issue when
    /// the text holds more than a single function.
    pub fn parse(text: &str) -> ValueResult<Self> {
        let nodes = node::parse_node_list(text)?;
        match nodes.as_slice() {
            [single] => Self::from_node(single),
            nodes => Err(ValueError::Arity {
                slot: "gradient",
                expected: "a single gradient function",
                found: nodes.len(),
            }
            .into()),
        }
    }

    /// Parse one already-folded node as a gradient, dispatching on the
    /// function name. A `repeating-` prefix selects the repeating form of
    /// the same grammar.
    ///
    /// # Errors
    ///
    /// Returns a structural issue for an unknown function name and the
    /// dispatcher's issues otherwise.
    pub fn from_node(node: &Node) -> ValueResult<Self> {
        let Node::Function { name, args } = node else {
            return Err(ValueError::syntax("a gradient function", node.describe()).into());
        };

        let lower = name.to_ascii_lowercase();
        let (base, repeating) = lower
            .strip_prefix("repeating-")
            .map_or((lower.as_str(), false), |base| (base, true));

        match base {
            "linear-gradient" => Ok(Self::Linear(linear::parse(args, repeating)?)),
            "radial-gradient" => Ok(Self::Radial(radial::parse(args, repeating)?)),
            "conic-gradient" => Ok(Self::Conic(conic::parse(args, repeating)?)),
            _ => Err(ValueError::structural(format!("unknown gradient function `{name}`")).into()),
        }
    }
}

/// Consume the shared `in <color-space>` clause if present, returning the
/// canonical space name.
///
/// [§ 12.2](https://www.w3.org/TR/css-color-4/#interpolation-space):
/// interpolation spaces come from a fixed keyword set.
fn parse_in_clause(cursor: &mut ArgCursor<'_>) -> ValueResult<Option<String>> {
    if cursor.take_keyword(&["in"]).is_none() {
        return Ok(None);
    }
    match cursor.take() {
        Some(node @ Node::Ident(name)) => {
            catalog::canonical_keyword(catalog::INTERPOLATION_COLOR_SPACES, name).map_or_else(
                || Err(ValueError::syntax("an interpolation color space", node.describe()).into()),
                |canonical| Ok(Some(canonical.to_string())),
            )
        }
        Some(other) => {
            Err(ValueError::syntax("an interpolation color space", other.describe()).into())
        }
        None => {
            Err(ValueError::syntax("an interpolation color space", "end of arguments").into())
        }
    }
}

/// Consume the comma that must separate leading clauses from the stop list.
fn expect_stop_list_comma(cursor: &mut ArgCursor<'_>) -> ValueResult<()> {
    match cursor.take() {
        Some(Node::Operator(',')) => Ok(()),
        Some(other) => {
            Err(ValueError::syntax("a comma before the color stops", other.describe()).into())
        }
        None => Err(ValueError::syntax("a comma before the color stops", "end of arguments").into()),
    }
}

/// Consume the shared `at <position>` clause if present.
fn parse_at_clause(cursor: &mut ArgCursor<'_>) -> ValueResult<Option<Position>> {
    if cursor.take_keyword(&["at"]).is_none() {
        return Ok(None);
    }
    let mut collected = Vec::new();
    while cursor.peek().is_some_and(position::is_position_node) {
        if let Some(node) = cursor.take() {
            collected.push(node.clone());
        }
    }
    Ok(Some(position::parse_position(&collected)?))
}
