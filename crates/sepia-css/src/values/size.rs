//! Radial gradient `<size>` values per
//! [§ 3.2 radial-gradient()](https://www.w3.org/TR/css-images-3/#radial-gradients).
//!
//! "`<size>` determines the size of the gradient's ending shape": one of
//! four extent keywords, one explicit circle radius, or two explicit
//! ellipse radii.

use serde::Serialize;
use strum_macros::Display;

use crate::values::length::LengthPercentage;

/// [§ 3.2 `<extent-keyword>`](https://www.w3.org/TR/css-images-3/#typedef-extent-keyword)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum RadialExtent {
    /// "The ending shape is sized so that it exactly meets the side of the
    /// gradient box closest to the gradient's center."
    ClosestSide,
    /// "Same as closest-side, except the ending shape is sized based on the
    /// farthest side(s)."
    FarthestSide,
    /// "The ending shape is sized so that it passes through the corner of
    /// the gradient box closest to the gradient's center."
    ClosestCorner,
    /// "Same as closest-corner, except the ending shape is sized based on
    /// the farthest corner. This is the default."
    FarthestCorner,
}

impl RadialExtent {
    /// Look up an extent keyword (ASCII case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "closest-side" => Some(Self::ClosestSide),
            "farthest-side" => Some(Self::FarthestSide),
            "closest-corner" => Some(Self::ClosestCorner),
            "farthest-corner" => Some(Self::FarthestCorner),
            _ => None,
        }
    }
}

/// A radial gradient's resolved `<size>`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RadialSize {
    /// One of the four named extents.
    Extent(RadialExtent),
    /// "If `<size>` is a single `<length>`, it gives the radius of a
    /// circle."
    CircleRadius(LengthPercentage),
    /// "If it is two `<length-percentage>`s, it gives the horizontal and
    /// vertical radii of an ellipse, in that order."
    EllipseRadii(LengthPercentage, LengthPercentage),
}

impl RadialSize {
    /// Canonical text form.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Extent(extent) => extent.to_string(),
            Self::CircleRadius(radius) => radius.to_css(),
            Self::EllipseRadii(horizontal, vertical) => {
                format!("{} {}", horizontal.to_css(), vertical.to_css())
            }
        }
    }
}
