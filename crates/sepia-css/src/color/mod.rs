//! Color values per [CSS Color Module Level 4](https://www.w3.org/TR/css-color-4/).
//!
//! The eight numeric function syntaxes (`rgb()`, `hsl()`, `hwb()`, `lab()`,
//! `lch()`, `oklab()`, `oklch()`, `color()`) share one structural shape,
//! three or more channels with an optional `/ alpha`, but differ in
//! per-channel semantics. Channels outside their legal interval are clamped
//! at parse time; alpha outside `[0, 1]` is rejected outright. Legacy
//! comma syntax is accepted for the rgb and hsl families only, and every
//! color regenerates in modern space-separated form.

mod generate;
mod parse;

pub(crate) use parse::is_color_node;

use serde::Serialize;
use strum_macros::Display;

use crate::error::{ValueError, ValueResult};
use crate::node::{self, Node};

/// The two color keywords with their own semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum SpecialColor {
    /// [§ 6.3](https://www.w3.org/TR/css-color-4/#transparent-color):
    /// "Fully transparent. This keyword can be considered a shorthand for
    /// transparent black, rgb(0 0 0 / 0)."
    Transparent,
    /// [§ 6.4](https://www.w3.org/TR/css-color-4/#currentcolor-color):
    /// "The currentcolor keyword represents the value of the color
    /// property."
    CurrentColor,
}

/// An sRGB color with 8-bit channels.
///
/// [§ 4.1](https://www.w3.org/TR/css-color-4/#rgb-functions):
/// "Values outside these ranges are not invalid, but are clamped to the
/// ranges defined here at parsed-value time."
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rgb {
    /// Red channel, already clamped and rounded.
    pub red: u8,
    /// Green channel, already clamped and rounded.
    pub green: u8,
    /// Blue channel, already clamped and rounded.
    pub blue: u8,
    /// Alpha in `[0, 1]`; `None` means fully opaque.
    pub alpha: Option<f64>,
}

/// [§ 7 HSL Colors](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hsl {
    /// Hue in degrees, wrapped into `[0, 360)`.
    pub hue: f64,
    /// Saturation percentage, clamped to `[0, 100]`.
    pub saturation: f64,
    /// Lightness percentage, clamped to `[0, 100]`.
    pub lightness: f64,
    /// Alpha in `[0, 1]`; `None` means fully opaque.
    pub alpha: Option<f64>,
}

/// [§ 8 HWB Colors](https://www.w3.org/TR/css-color-4/#the-hwb-notation)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hwb {
    /// Hue in degrees, wrapped into `[0, 360)`.
    pub hue: f64,
    /// Whiteness percentage, clamped to `[0, 100]`.
    pub whiteness: f64,
    /// Blackness percentage, clamped to `[0, 100]`.
    pub blackness: f64,
    /// Alpha in `[0, 1]`; `None` means fully opaque.
    pub alpha: Option<f64>,
}

/// [§ 9.1 lab()](https://www.w3.org/TR/css-color-4/#specifying-lab-lch)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lab {
    /// Lightness, clamped to `[0, 100]`.
    pub lightness: f64,
    /// The a axis, clamped to `[-125, 125]`.
    pub a: f64,
    /// The b axis, clamped to `[-125, 125]`.
    pub b: f64,
    /// Alpha in `[0, 1]`; `None` means fully opaque.
    pub alpha: Option<f64>,
}

/// [§ 9.2 lch()](https://www.w3.org/TR/css-color-4/#specifying-lab-lch)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lch {
    /// Lightness, clamped to `[0, 100]`.
    pub lightness: f64,
    /// Chroma, clamped to `[0, 150]`.
    pub chroma: f64,
    /// Hue in degrees, wrapped into `[0, 360)`.
    pub hue: f64,
    /// Alpha in `[0, 1]`; `None` means fully opaque.
    pub alpha: Option<f64>,
}

/// [§ 9.3 oklab()](https://www.w3.org/TR/css-color-4/#specifying-oklab-oklch)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Oklab {
    /// Lightness, clamped to `[0, 1]`; `100%` maps to `1`.
    pub lightness: f64,
    /// The a axis, clamped to `[-0.4, 0.4]`.
    pub a: f64,
    /// The b axis, clamped to `[-0.4, 0.4]`.
    pub b: f64,
    /// Alpha in `[0, 1]`; `None` means fully opaque.
    pub alpha: Option<f64>,
}

/// [§ 9.4 oklch()](https://www.w3.org/TR/css-color-4/#specifying-oklab-oklch)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Oklch {
    /// Lightness, clamped to `[0, 1]`; `100%` maps to `1`.
    pub lightness: f64,
    /// Chroma, clamped to `[0, 0.4]`.
    pub chroma: f64,
    /// Hue in degrees, wrapped into `[0, 360)`.
    pub hue: f64,
    /// Alpha in `[0, 1]`; `None` means fully opaque.
    pub alpha: Option<f64>,
}

/// [§ 10.1 color()](https://www.w3.org/TR/css-color-4/#color-function)
///
/// "The color() function allows a color to be specified in a particular,
/// specified color space." Channels are stored unclamped; the predefined
/// space catalog bounds the space name, not the values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorFunction {
    /// The predefined color space, in canonical spelling.
    pub space: String,
    /// The channel values, percentages already mapped to `[0, 1]`.
    pub channels: Vec<f64>,
    /// Alpha in `[0, 1]`; `None` means fully opaque.
    pub alpha: Option<f64>,
}

/// Any parsed color value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Color {
    /// A hex color, normalized to lowercase 6 or 8 digits.
    Hex(String),
    /// A named color in canonical (lowercase) spelling.
    Named(String),
    /// `transparent` or `currentcolor`.
    Special(SpecialColor),
    /// A system color keyword (`canvas`, `linktext`, ...).
    System(String),
    /// `rgb()` / `rgba()`.
    Rgb(Rgb),
    /// `hsl()` / `hsla()`.
    Hsl(Hsl),
    /// `hwb()`.
    Hwb(Hwb),
    /// `lab()`.
    Lab(Lab),
    /// `lch()`.
    Lch(Lch),
    /// `oklab()`.
    Oklab(Oklab),
    /// `oklch()`.
    Oklch(Oklch),
    /// `color()`.
    Function(ColorFunction),
}

impl Color {
    /// Parse one color value from text.
    ///
    /// # Errors
    ///
    /// Returns the issues of the underlying parse, or an arity issue when
    /// the text holds more than a single value.
    pub fn parse(text: &str) -> ValueResult<Self> {
        let nodes = node::parse_node_list(text)?;
        match nodes.as_slice() {
            [single] => Self::from_node(single),
            nodes => Err(ValueError::Arity {
                slot: "color",
                expected: "a single value",
                found: nodes.len(),
            }
            .into()),
        }
    }

    /// Parse one already-folded node as a color.
    ///
    /// # Errors
    ///
    /// Returns a structural issue for an unknown color function, and a
    /// syntax, arity, or range issue per the failing channel.
    pub fn from_node(node: &Node) -> ValueResult<Self> {
        parse::from_node(node)
    }
}
