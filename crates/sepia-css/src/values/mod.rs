//! Reusable component parsers and their value types.
//!
//! Each submodule parses one grammar component from a [`crate::node::Node`],
//! normalizing units and ranges on the way in, and serializes it back to
//! one canonical text form on the way out.

/// `<angle>` values, unit conversion, and hue wrapping.
pub mod angle;
/// `<length>` and `<length-percentage>` values.
pub mod length;
/// Canonical number formatting shared by all generators.
pub mod number;
/// `<position>` values (1, 2, and 4-value forms).
pub mod position;
/// Radial gradient `<size>` values.
pub mod size;

pub use angle::{Angle, wrap_degrees};
pub use length::{Length, LengthPercentage};
pub use position::{Position, PositionComponent, PositionKeyword};
pub use size::{RadialExtent, RadialSize};
