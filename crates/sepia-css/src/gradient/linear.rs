//! The linear gradient grammar.
//!
//! [§ 3.1](https://www.w3.org/TR/css-images-3/#linear-gradient-syntax):
//! `linear-gradient([ <angle> | to <side-or-corner> ]? , <color-stop-list>)`

use crate::cursor::ArgCursor;
use crate::error::{ValueError, ValueResult};
use crate::node::{self, Node};
use crate::values::angle;

use super::stops::{self, StopPositionKind};
use super::{HorizontalSide, LineDirection, LinearGradient, VerticalSide};

pub(super) fn parse(args: &[Node], repeating: bool) -> ValueResult<LinearGradient> {
    let mut cursor = ArgCursor::new(args);

    let direction = parse_direction(&mut cursor)?;
    let color_space = super::parse_in_clause(&mut cursor)?;

    if direction.is_some() || color_space.is_some() {
        super::expect_stop_list_comma(&mut cursor)?;
    }

    let groups = node::split_comma_groups(cursor.remaining())?;
    let stops = stops::parse_color_stops(&groups, StopPositionKind::LengthPercentage)?;

    Ok(LinearGradient {
        direction,
        color_space,
        stops,
        repeating,
    })
}

/// Consume the optional leading `<angle> | to <side-or-corner>` clause.
fn parse_direction(cursor: &mut ArgCursor<'_>) -> ValueResult<Option<LineDirection>> {
    if let Some(node) = cursor.peek()
        && angle::is_angle_node(node)
    {
        let angle = angle::parse_angle(node)?;
        let _ = cursor.take();
        return Ok(Some(LineDirection::Angle(angle)));
    }

    if cursor.take_keyword(&["to"]).is_none() {
        return Ok(None);
    }

    // `to` takes one side keyword or a corner (one per axis, either order).
    let mut horizontal = None;
    let mut vertical = None;
    while let Some(side) = cursor.take_keyword(&["left", "right", "top", "bottom"]) {
        match side {
            "left" => assign_side(&mut horizontal, HorizontalSide::Left, "horizontal")?,
            "right" => assign_side(&mut horizontal, HorizontalSide::Right, "horizontal")?,
            "top" => assign_side(&mut vertical, VerticalSide::Top, "vertical")?,
            _ => assign_side(&mut vertical, VerticalSide::Bottom, "vertical")?,
        }
    }

    if horizontal.is_none() && vertical.is_none() {
        return Err(ValueError::syntax(
            "a side or corner after `to`",
            cursor
                .peek()
                .map_or_else(|| "end of arguments".to_string(), Node::describe),
        )
        .into());
    }

    Ok(Some(LineDirection::Side {
        horizontal,
        vertical,
    }))
}

/// Fill one axis slot, rejecting a second keyword on the same axis.
fn assign_side<T>(slot: &mut Option<T>, side: T, axis: &'static str) -> ValueResult<()> {
    if slot.is_some() {
        return Err(ValueError::syntax(
            "at most one side keyword per axis",
            format!("a second {axis} side"),
        )
        .into());
    }
    *slot = Some(side);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::Gradient;
    use super::*;

    fn linear(text: &str) -> ValueResult<LinearGradient> {
        match Gradient::parse(text)? {
            Gradient::Linear(gradient) => Ok(gradient),
            other => panic!("Expected linear gradient, got {other:?}"),
        }
    }

    #[test]
    fn test_plain_stop_list() {
        let gradient = linear("linear-gradient(red, blue)").unwrap();
        assert!(gradient.direction.is_none());
        assert_eq!(gradient.stops.len(), 2);
        assert!(!gradient.repeating);
    }

    #[test]
    fn test_angle_direction() {
        let gradient = linear("linear-gradient(0.25turn, red, blue)").unwrap();
        match gradient.direction {
            Some(LineDirection::Angle(angle)) => assert_eq!(angle.degrees(), 90.0),
            other => panic!("Expected angle direction, got {other:?}"),
        }
    }

    #[test]
    fn test_corner_direction_either_order() {
        let gradient = linear("linear-gradient(to top right, red, blue)").unwrap();
        assert_eq!(
            gradient.direction,
            Some(LineDirection::Side {
                horizontal: Some(HorizontalSide::Right),
                vertical: Some(VerticalSide::Top),
            })
        );
    }

    #[test]
    fn test_duplicate_axis_rejected() {
        assert!(linear("linear-gradient(to left right, red, blue)").is_err());
    }

    #[test]
    fn test_clause_without_comma_rejected() {
        assert!(linear("linear-gradient(45deg red, blue)").is_err());
    }

    #[test]
    fn test_repeating_prefix() {
        let gradient = linear("repeating-linear-gradient(red, blue 20%)").unwrap();
        assert!(gradient.repeating);
    }
}
