//! `<position>` values per
//! [§ 2.1 The `<position>` type](https://www.w3.org/TR/css-values-4/#position).
//!
//! "The `<position>` value specifies the position of a object area (e.g.
//! background image) inside a positioning area (e.g. background positioning
//! area)."
//!
//! The 1, 2, and 4-value forms are supported. A single keyword is assigned
//! to the axis it names with the other axis defaulting to `center`; the
//! 4-value "edge + offset" form pairs a left/right edge with a horizontal
//! offset and a top/bottom edge with a vertical offset.

use serde::Serialize;
use strum_macros::Display;

use crate::error::{Issues, ValueError, ValueResult};
use crate::node::Node;
use crate::values::length::{self, LengthPercentage};

/// A positioning keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PositionKeyword {
    /// Resolves against the left edge (horizontal axis).
    Left,
    /// Resolves against the right edge (horizontal axis).
    Right,
    /// Resolves against the top edge (vertical axis).
    Top,
    /// Resolves against the bottom edge (vertical axis).
    Bottom,
    /// The midpoint of either axis.
    Center,
}

/// Which axis a keyword may fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
    Either,
}

impl PositionKeyword {
    /// Look up a keyword identifier (ASCII case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "center" => Some(Self::Center),
            _ => None,
        }
    }

    const fn axis(self) -> Axis {
        match self {
            Self::Left | Self::Right => Axis::Horizontal,
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Center => Axis::Either,
        }
    }

    const fn fits_horizontal(self) -> bool {
        !matches!(self.axis(), Axis::Vertical)
    }

    const fn fits_vertical(self) -> bool {
        !matches!(self.axis(), Axis::Horizontal)
    }
}

/// One axis of a resolved `<position>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PositionComponent {
    /// A bare keyword (`left`, `center`, ...).
    Keyword(PositionKeyword),
    /// A bare offset from the axis start.
    Length(LengthPercentage),
    /// The 4-value "edge + offset" form (`right 10px`).
    KeywordOffset {
        /// The edge the offset is measured from (never `center`).
        keyword: PositionKeyword,
        /// The offset from that edge.
        offset: LengthPercentage,
    },
}

impl PositionComponent {
    /// Canonical text form.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Keyword(keyword) => keyword.to_string(),
            Self::Length(value) => value.to_css(),
            Self::KeywordOffset { keyword, offset } => {
                format!("{keyword} {}", offset.to_css())
            }
        }
    }
}

/// A fully resolved `<position>`: one component per axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Position {
    /// The horizontal component.
    pub horizontal: PositionComponent,
    /// The vertical component.
    pub vertical: PositionComponent,
}

impl Position {
    /// Canonical text form: both axes, horizontal first, regardless of the
    /// form or order the input used.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("{} {}", self.horizontal.to_css(), self.vertical.to_css())
    }
}

/// One raw position term before axis assignment.
enum Term {
    Keyword(PositionKeyword),
    Value(LengthPercentage),
}

/// Is this node a legal start/continuation of a `<position>`?
#[must_use]
pub(crate) fn is_position_node(node: &Node) -> bool {
    match node {
        Node::Ident(name) => PositionKeyword::from_name(name).is_some(),
        _ => length::is_length_percentage_node(node),
    }
}

/// Parse a collected run of position nodes (the dispatcher hands over every
/// consecutive node that [`is_position_node`] accepted).
///
/// # Errors
///
/// Returns an arity issue for 0 or 3 terms (or more than 4), and a syntax
/// issue when a keyword lands on an axis it cannot name.
pub(crate) fn parse_position(nodes: &[Node]) -> ValueResult<Position> {
    let mut terms = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Node::Ident(name) => {
                let keyword = PositionKeyword::from_name(name).ok_or_else(|| {
                    ValueError::syntax("a position keyword", node.describe())
                })?;
                terms.push(Term::Keyword(keyword));
            }
            _ => terms.push(Term::Value(length::parse_length_percentage(node)?)),
        }
    }

    match terms.len() {
        1 => one_value_form(terms.remove(0)),
        2 => {
            let second = terms.remove(1);
            let first = terms.remove(0);
            two_value_form(first, second)
        }
        4 => four_value_form(terms),
        found => Err(ValueError::Arity {
            slot: "position",
            expected: "1, 2, or 4 values",
            found,
        }
        .into()),
    }
}

/// "If only one value is specified, the second value is assumed to be
/// center."
fn one_value_form(term: Term) -> ValueResult<Position> {
    let center = PositionComponent::Keyword(PositionKeyword::Center);
    match term {
        Term::Keyword(keyword) if keyword.axis() == Axis::Vertical => Ok(Position {
            horizontal: center,
            vertical: PositionComponent::Keyword(keyword),
        }),
        Term::Keyword(keyword) => Ok(Position {
            horizontal: PositionComponent::Keyword(keyword),
            vertical: center,
        }),
        Term::Value(value) => Ok(Position {
            horizontal: PositionComponent::Length(value),
            vertical: center,
        }),
    }
}

/// The first value names the horizontal axis and the second the vertical
/// one, except that two axis-specific keywords may appear in either order.
fn two_value_form(first: Term, second: Term) -> ValueResult<Position> {
    let (first, second) = match (&first, &second) {
        (Term::Keyword(a), Term::Keyword(b))
            if a.axis() == Axis::Vertical && b.axis() != Axis::Vertical =>
        {
            (second, first)
        }
        _ => (first, second),
    };

    let horizontal = match first {
        Term::Keyword(keyword) => {
            if !keyword.fits_horizontal() {
                return Err(keyword_axis_error(keyword, "horizontal"));
            }
            PositionComponent::Keyword(keyword)
        }
        Term::Value(value) => PositionComponent::Length(value),
    };

    let vertical = match second {
        Term::Keyword(keyword) => {
            if !keyword.fits_vertical() {
                return Err(keyword_axis_error(keyword, "vertical"));
            }
            PositionComponent::Keyword(keyword)
        }
        Term::Value(value) => PositionComponent::Length(value),
    };

    Ok(Position {
        horizontal,
        vertical,
    })
}

/// "If four values are given, then each `<percentage>` or `<length>`
/// represents an offset and must be preceded by a keyword, which specifies
/// from which edge the offset is given."
fn four_value_form(terms: Vec<Term>) -> ValueResult<Position> {
    let mut pairs = Vec::with_capacity(2);
    let mut iter = terms.into_iter();
    while let Some(first) = iter.next() {
        let Term::Keyword(keyword) = first else {
            return Err(
                ValueError::syntax("an edge keyword before each offset", "a bare value").into(),
            );
        };
        if keyword.axis() == Axis::Either {
            return Err(
                ValueError::syntax("an edge keyword (left/right/top/bottom)", "`center`").into(),
            );
        }
        let Some(Term::Value(offset)) = iter.next() else {
            return Err(ValueError::syntax("an offset after the edge keyword", "none").into());
        };
        pairs.push((keyword, offset));
    }

    let [(first_keyword, first_offset), (second_keyword, second_offset)] =
        <[(PositionKeyword, LengthPercentage); 2]>::try_from(pairs).map_err(|_| {
            Issues::from(ValueError::Arity {
                slot: "position",
                expected: "two edge/offset pairs",
                found: 0,
            })
        })?;

    match (first_keyword.axis(), second_keyword.axis()) {
        (Axis::Horizontal, Axis::Vertical) => Ok(Position {
            horizontal: PositionComponent::KeywordOffset {
                keyword: first_keyword,
                offset: first_offset,
            },
            vertical: PositionComponent::KeywordOffset {
                keyword: second_keyword,
                offset: second_offset,
            },
        }),
        (Axis::Vertical, Axis::Horizontal) => Ok(Position {
            horizontal: PositionComponent::KeywordOffset {
                keyword: second_keyword,
                offset: second_offset,
            },
            vertical: PositionComponent::KeywordOffset {
                keyword: first_keyword,
                offset: first_offset,
            },
        }),
        _ => Err(ValueError::syntax(
            "one horizontal and one vertical edge keyword",
            "two edges on the same axis",
        )
        .into()),
    }
}

fn keyword_axis_error(keyword: PositionKeyword, axis: &'static str) -> Issues {
    ValueError::syntax(
        match axis {
            "horizontal" => "a horizontal keyword (left/right/center)",
            _ => "a vertical keyword (top/bottom/center)",
        },
        format!("`{keyword}`"),
    )
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::parse_node_list;

    fn position(text: &str) -> ValueResult<Position> {
        let nodes = parse_node_list(text).unwrap();
        parse_position(&nodes)
    }

    #[test]
    fn test_single_vertical_keyword_centers_horizontal() {
        let pos = position("top").unwrap();
        assert_eq!(
            pos.horizontal,
            PositionComponent::Keyword(PositionKeyword::Center)
        );
        assert_eq!(pos.vertical, PositionComponent::Keyword(PositionKeyword::Top));
    }

    #[test]
    fn test_two_keywords_reorder() {
        let pos = position("top left").unwrap();
        assert_eq!(
            pos.horizontal,
            PositionComponent::Keyword(PositionKeyword::Left)
        );
        assert_eq!(pos.vertical, PositionComponent::Keyword(PositionKeyword::Top));
    }

    #[test]
    fn test_four_value_form() {
        let pos = position("bottom 10px right 20%").unwrap();
        assert_eq!(pos.to_css(), "right 20% bottom 10px");
    }

    #[test]
    fn test_three_values_rejected() {
        assert!(position("left 10px top").is_err());
    }

    #[test]
    fn test_wrong_axis_rejected() {
        assert!(position("top top").is_err());
    }
}
