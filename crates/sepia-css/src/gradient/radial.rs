//! The radial gradient grammar.
//!
//! [§ 3.2](https://www.w3.org/TR/css-images-3/#radial-gradient-syntax):
//! `radial-gradient([ <ending-shape> || <size> ]? [ at <position> ]? , <color-stop-list>)`
//!
//! Shape and size may appear independently, together, and in either order,
//! so the leading tokens are tried in a fixed sequence: a shape keyword,
//! then a size (extent keyword or explicit radii), then the shape keyword
//! again for the size-first order.

use crate::cursor::ArgCursor;
use crate::error::{ValueError, ValueResult};
use crate::node::{self, Node};
use crate::values::length;
use crate::values::size::{RadialExtent, RadialSize};

use super::stops::{self, StopPositionKind};
use super::{RadialGradient, Shape};

pub(super) fn parse(args: &[Node], repeating: bool) -> ValueResult<RadialGradient> {
    let mut cursor = ArgCursor::new(args);

    let mut shape = take_shape(&mut cursor);
    let size = take_size(&mut cursor)?;
    if shape.is_none() {
        shape = take_shape(&mut cursor);
    }
    check_shape_size(shape, size.as_ref())?;

    let position = super::parse_at_clause(&mut cursor)?;
    let color_space = super::parse_in_clause(&mut cursor)?;

    if shape.is_some() || size.is_some() || position.is_some() || color_space.is_some() {
        super::expect_stop_list_comma(&mut cursor)?;
    }

    let groups = node::split_comma_groups(cursor.remaining())?;
    let stops = stops::parse_color_stops(&groups, StopPositionKind::LengthPercentage)?;

    Ok(RadialGradient {
        shape,
        size,
        position,
        color_space,
        stops,
        repeating,
    })
}

/// Consume a `circle` / `ellipse` keyword if one is next.
fn take_shape(cursor: &mut ArgCursor<'_>) -> Option<Shape> {
    match cursor.take_keyword(&["circle", "ellipse"]) {
        Some("circle") => Some(Shape::Circle),
        Some(_) => Some(Shape::Ellipse),
        None => None,
    }
}

/// Consume a `<size>` if one is next: an extent keyword, or one or two
/// explicit `<length-percentage>` radii.
fn take_size(cursor: &mut ArgCursor<'_>) -> ValueResult<Option<RadialSize>> {
    if let Some(Node::Ident(name)) = cursor.peek()
        && let Some(extent) = RadialExtent::from_name(name)
    {
        let _ = cursor.take();
        return Ok(Some(RadialSize::Extent(extent)));
    }

    if !cursor.peek().is_some_and(length::is_length_percentage_node) {
        return Ok(None);
    }
    let first = cursor.take_length_or_percentage()?;

    if cursor.peek().is_some_and(length::is_length_percentage_node) {
        let second = cursor.take_length_or_percentage()?;
        return Ok(Some(RadialSize::EllipseRadii(first, second)));
    }
    Ok(Some(RadialSize::CircleRadius(first)))
}

/// Reject a shape keyword paired with a size of the other shape.
fn check_shape_size(shape: Option<Shape>, size: Option<&RadialSize>) -> ValueResult<()> {
    match (shape, size) {
        (Some(Shape::Circle), Some(RadialSize::EllipseRadii(..))) => Err(ValueError::syntax(
            "a single radius for a circle",
            "two radii",
        )
        .into()),
        (Some(Shape::Ellipse), Some(RadialSize::CircleRadius(_))) => Err(ValueError::syntax(
            "two radii for an ellipse",
            "a single radius",
        )
        .into()),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::super::Gradient;
    use super::*;
    use crate::values::length::{Length, LengthPercentage};

    fn radial(text: &str) -> ValueResult<RadialGradient> {
        match Gradient::parse(text)? {
            Gradient::Radial(gradient) => Ok(gradient),
            other => panic!("Expected radial gradient, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_circle_size() {
        let gradient = radial("radial-gradient(circle 100px, red, blue)").unwrap();
        assert_eq!(gradient.shape, Some(Shape::Circle));
        assert_eq!(
            gradient.size,
            Some(RadialSize::CircleRadius(LengthPercentage::Length(
                Length::new(100.0, "px")
            )))
        );
    }

    #[test]
    fn test_size_before_shape() {
        let gradient = radial("radial-gradient(100px circle, red, blue)").unwrap();
        assert_eq!(gradient.shape, Some(Shape::Circle));
        assert!(matches!(
            gradient.size,
            Some(RadialSize::CircleRadius(_))
        ));
    }

    #[test]
    fn test_extent_and_position() {
        let gradient =
            radial("radial-gradient(farthest-side at center top, red, blue)").unwrap();
        assert_eq!(
            gradient.size,
            Some(RadialSize::Extent(RadialExtent::FarthestSide))
        );
        assert!(gradient.position.is_some());
    }

    #[test]
    fn test_circle_with_two_radii_rejected() {
        assert!(radial("radial-gradient(circle 100px 50px, red, blue)").is_err());
    }

    #[test]
    fn test_ellipse_with_one_radius_rejected() {
        assert!(radial("radial-gradient(ellipse 100px, red, blue)").is_err());
    }

    #[test]
    fn test_bare_stop_list() {
        let gradient = radial("radial-gradient(red, blue)").unwrap();
        assert!(gradient.shape.is_none());
        assert!(gradient.size.is_none());
    }
}
