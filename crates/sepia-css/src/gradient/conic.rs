//! The conic gradient grammar.
//!
//! [§ 7.1 of CSS Images 4](https://www.w3.org/TR/css-images-4/#conic-gradient-syntax):
//! `conic-gradient([ from <angle> ]? [ at <position> ]? , <angular-color-stop-list>)`

use crate::cursor::ArgCursor;
use crate::error::{ValueError, ValueResult};
use crate::node::{self, Node};
use crate::values::angle::{self, Angle};

use super::stops::{self, StopPositionKind};
use super::ConicGradient;

pub(super) fn parse(args: &[Node], repeating: bool) -> ValueResult<ConicGradient> {
    let mut cursor = ArgCursor::new(args);

    let from_angle = parse_from_clause(&mut cursor)?;
    let position = super::parse_at_clause(&mut cursor)?;
    let color_space = super::parse_in_clause(&mut cursor)?;

    if from_angle.is_some() || position.is_some() || color_space.is_some() {
        super::expect_stop_list_comma(&mut cursor)?;
    }

    let groups = node::split_comma_groups(cursor.remaining())?;
    let stops = stops::parse_color_stops(&groups, StopPositionKind::AngleOrLengthPercentage)?;

    Ok(ConicGradient {
        from_angle,
        position,
        color_space,
        stops,
        repeating,
    })
}

/// Consume the optional `from <angle>` rotation clause.
fn parse_from_clause(cursor: &mut ArgCursor<'_>) -> ValueResult<Option<Angle>> {
    if cursor.take_keyword(&["from"]).is_none() {
        return Ok(None);
    }
    match cursor.take() {
        Some(node) => Ok(Some(angle::parse_angle(node)?)),
        None => Err(ValueError::syntax("an angle after `from`", "end of arguments").into()),
    }
}

#[cfg(test)]
mod tests {
    use super::super::{ColorStop, Gradient, StopPosition};
    use super::*;
    use crate::error::ErrorKind;

    fn conic(text: &str) -> ValueResult<ConicGradient> {
        match Gradient::parse(text)? {
            Gradient::Conic(gradient) => Ok(gradient),
            other => panic!("Expected conic gradient, got {other:?}"),
        }
    }

    #[test]
    fn test_from_and_at_clauses() {
        let gradient = conic("conic-gradient(from 90deg at center, red, blue)").unwrap();
        assert_eq!(gradient.from_angle, Some(Angle::from_degrees(90.0)));
        assert!(gradient.position.is_some());
    }

    #[test]
    fn test_angular_stop_positions() {
        let gradient = conic("conic-gradient(red 0.25turn, blue 75%)").unwrap();
        match &gradient.stops[..] {
            [
                ColorStop {
                    position: Some(StopPosition::Angle(angle)),
                    ..
                },
                ColorStop {
                    position: Some(StopPosition::LengthPercentage(_)),
                    ..
                },
            ] => assert_eq!(angle.degrees(), 90.0),
            other => panic!("Unexpected stops {other:?}"),
        }
    }

    #[test]
    fn test_length_stop_positions_accepted() {
        let gradient = conic("conic-gradient(red 10px, blue)").unwrap();
        match &gradient.stops[0].position {
            Some(StopPosition::LengthPercentage(position)) => {
                assert_eq!(position.to_css(), "10px");
            }
            other => panic!("Expected length position, got {other:?}"),
        }
    }

    #[test]
    fn test_single_stop_is_structural_error() {
        let issues = conic("conic-gradient(red)").unwrap_err();
        assert_eq!(issues.primary().kind(), ErrorKind::Structural);
        assert!(issues.primary().to_string().contains("at least 2 color stops"));
    }
}
