//! `<angle>` values per [§ 6.3 Angle Units](https://www.w3.org/TR/css-values-4/#angles).
//!
//! "Angle values are dimensions denoted by `<angle>`. The angle unit
//! identifiers are: deg, grad, rad, turn."
//!
//! Every angle in this crate is normalized to degrees and wrapped into
//! `[0, 360)` at parse time, so the IR carries one unit and one canonical
//! range regardless of the surface syntax.

use serde::Serialize;
use strum_macros::Display;

use crate::error::{ValueError, ValueResult};
use crate::node::Node;
use crate::values::number::fmt_number;

/// [§ 6.3 Angle Units](https://www.w3.org/TR/css-values-4/#angles)
///
/// The four angle unit identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum AngleUnit {
    /// "deg: Degrees. There are 360 degrees in a full circle."
    Deg,
    /// "rad: Radians. There are 2π radians in a full circle."
    Rad,
    /// "grad: Gradians, also known as 'gons' or 'grades'. There are 400
    /// gradians in a full circle."
    Grad,
    /// "turn: Turns. There is 1 turn in a full circle."
    Turn,
}

impl AngleUnit {
    /// Look up a unit identifier (ASCII case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "deg" => Some(Self::Deg),
            "rad" => Some(Self::Rad),
            "grad" => Some(Self::Grad),
            "turn" => Some(Self::Turn),
            _ => None,
        }
    }

    /// Convert a value in this unit to degrees, with exact constant factors.
    #[must_use]
    pub fn to_degrees(self, value: f64) -> f64 {
        match self {
            Self::Deg => value,
            Self::Rad => value * 180.0 / std::f64::consts::PI,
            Self::Grad => value * 360.0 / 400.0,
            Self::Turn => value * 360.0,
        }
    }
}

/// An angle, stored in degrees and already wrapped into `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    /// Create an angle from a degree value, wrapping it into `[0, 360)`.
    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            degrees: wrap_degrees(degrees),
        }
    }

    /// The wrapped degree value.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        self.degrees
    }

    /// Canonical text form, always in degrees.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!("{}deg", fmt_number(self.degrees))
    }
}

/// Wrap a degree value into `[0, 360)`.
///
/// A wrapped result of exactly 0 is represented as positive zero so output
/// stays deterministic (`-360.0` wraps to `0`, not `-0`).
#[must_use]
pub fn wrap_degrees(degrees: f64) -> f64 {
    let wrapped = ((degrees % 360.0) + 360.0) % 360.0;
    if wrapped == 0.0 { 0.0 } else { wrapped }
}

/// Parse one node as an `<angle>`.
///
/// "Because this value is so often given in degrees, the argument can also
/// be given as a number, which is interpreted as degrees."
/// ([CSS Color 4 § 7.1](https://www.w3.org/TR/css-color-4/#typedef-hue))
///
/// # Errors
///
/// Returns a syntax issue for a non-angle unit or a non-numeric node.
pub fn parse_angle(node: &Node) -> ValueResult<Angle> {
    match node {
        Node::Number(value) => Ok(Angle::from_degrees(*value)),
        Node::Dimension { value, unit } => AngleUnit::from_name(unit).map_or_else(
            || Err(ValueError::syntax("an angle unit (deg, rad, grad, turn)", node.describe()).into()),
            |unit| Ok(Angle::from_degrees(unit.to_degrees(*value))),
        ),
        other => Err(ValueError::syntax("an angle", other.describe()).into()),
    }
}

/// Is this node parseable as an `<angle>`?
#[must_use]
pub fn is_angle_node(node: &Node) -> bool {
    match node {
        Node::Number(_) => true,
        Node::Dimension { unit, .. } => AngleUnit::from_name(unit).is_some(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_is_modular() {
        assert_eq!(wrap_degrees(450.0), 90.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);
        assert_eq!(wrap_degrees(720.0), 0.0);
    }

    #[test]
    fn test_wrap_never_emits_negative_zero() {
        let wrapped = wrap_degrees(-360.0);
        assert_eq!(wrapped, 0.0);
        assert!(wrapped.is_sign_positive());
    }

    #[test]
    fn test_unit_conversion() {
        assert_eq!(AngleUnit::Turn.to_degrees(0.5), 180.0);
        assert_eq!(AngleUnit::Grad.to_degrees(400.0), 360.0);
        assert!((AngleUnit::Rad.to_degrees(std::f64::consts::PI) - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_canonical_output_in_degrees() {
        let angle = parse_angle(&Node::Dimension {
            value: 0.25,
            unit: "turn".to_string(),
        })
        .unwrap();
        assert_eq!(angle.to_css(), "90deg");
    }
}
