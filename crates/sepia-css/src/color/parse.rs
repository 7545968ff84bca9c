//! Parsers for the color family.
//!
//! Every function parser walks its arguments through an [`ArgCursor`] in a
//! single forward pass. Channel values outside their legal interval are
//! clamped ([§ 4.1](https://www.w3.org/TR/css-color-4/#rgb-functions):
//! "Values outside these ranges are not invalid, but are clamped to the
//! ranges defined here at parsed-value time"); alpha is the one slot that
//! rejects instead of clamping.

use crate::catalog;
use crate::cursor::ArgCursor;
use crate::error::{ValueError, ValueResult};
use crate::node::Node;
use crate::values::angle;

use super::{Color, ColorFunction, Hsl, Hwb, Lab, Lch, Oklab, Oklch, Rgb, SpecialColor};

/// The function names this family owns (`rgba`/`hsla` are aliases).
const COLOR_FUNCTION_NAMES: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color",
];

/// Is this identifier one of the color function names?
pub(crate) fn is_color_function_name(name: &str) -> bool {
    catalog::canonical_keyword(COLOR_FUNCTION_NAMES, name).is_some()
}

/// Is this identifier a color keyword of any kind?
pub(crate) fn is_color_keyword(name: &str) -> bool {
    SpecialColor::from_name(name).is_some()
        || catalog::is_named_color(name)
        || catalog::is_system_color(name)
}

/// Can this node open a color value?
pub(crate) fn is_color_node(node: &Node) -> bool {
    match node {
        Node::Hash(_) => true,
        Node::Ident(name) => is_color_keyword(name),
        Node::Function { name, .. } => is_color_function_name(name),
        _ => false,
    }
}

impl SpecialColor {
    /// Look up `transparent` / `currentcolor` (ASCII case-insensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "transparent" => Some(Self::Transparent),
            "currentcolor" => Some(Self::CurrentColor),
            _ => None,
        }
    }
}

/// Dispatch one node to the matching color parser.
pub(super) fn from_node(node: &Node) -> ValueResult<Color> {
    match node {
        Node::Hash(digits) => parse_hex(digits),
        Node::Ident(name) => parse_keyword(name, node),
        Node::Function { name, args } => parse_function(name, args),
        other => Err(ValueError::syntax("a color", other.describe()).into()),
    }
}

/// Resolve a bare identifier to its color kind.
fn parse_keyword(name: &str, node: &Node) -> ValueResult<Color> {
    if let Some(special) = SpecialColor::from_name(name) {
        return Ok(Color::Special(special));
    }
    if let Some(canonical) = catalog::canonical_keyword(catalog::NAMED_COLORS, name) {
        return Ok(Color::Named(canonical.to_string()));
    }
    if let Some(canonical) = catalog::canonical_keyword(catalog::SYSTEM_COLORS, name) {
        return Ok(Color::System(canonical.to_string()));
    }
    Err(ValueError::syntax("a color", node.describe()).into())
}

/// [§ 5 Hex notations](https://www.w3.org/TR/css-color-4/#hex-notation)
///
/// Normalizes to lowercase, expands the 3 and 4-digit shorthands, and drops
/// a fully opaque alpha pair so `#F00`, `#ff0000` and `#ff0000ff` all store
/// the same six digits.
fn parse_hex(digits: &str) -> ValueResult<Color> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValueError::syntax("hex digits", format!("hash `#{digits}`")).into());
    }

    let lower = digits.to_ascii_lowercase();
    let mut expanded = match lower.len() {
        3 | 4 => lower.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => lower,
        _ => {
            return Err(
                ValueError::syntax("3, 4, 6, or 8 hex digits", format!("hash `#{digits}`")).into(),
            );
        }
    };

    if expanded.len() == 8 && expanded.ends_with("ff") {
        expanded.truncate(6);
    }
    Ok(Color::Hex(expanded))
}

/// Dispatch a function node by name.
pub(super) fn parse_function(name: &str, args: &[Node]) -> ValueResult<Color> {
    let Some(canonical) = catalog::canonical_keyword(COLOR_FUNCTION_NAMES, name) else {
        return Err(ValueError::structural(format!("unknown color function `{name}`")).into());
    };

    let mut cursor = ArgCursor::new(args);

    // Only the two legacy families ever accepted comma arguments.
    if cursor.is_legacy() && !matches!(canonical, "rgb" | "rgba" | "hsl" | "hsla") {
        return Err(ValueError::syntax(
            "space-separated arguments",
            format!("commas in `{canonical}()`"),
        )
        .into());
    }

    let color = match canonical {
        "rgb" | "rgba" => parse_rgb(&mut cursor)?,
        "hsl" | "hsla" => parse_hsl(&mut cursor)?,
        "hwb" => parse_hwb(&mut cursor)?,
        "lab" => parse_lab(&mut cursor)?,
        "lch" => parse_lch(&mut cursor)?,
        "oklab" => parse_oklab(&mut cursor)?,
        "oklch" => parse_oklch(&mut cursor)?,
        _ => parse_color_function(&mut cursor)?,
    };
    cursor.expect_done("color arguments")?;
    Ok(color)
}

/// One channel value before model-specific mapping.
struct Numeric {
    value: f64,
    percent: bool,
}

/// Consume a number-or-percentage channel.
fn take_numeric(cursor: &mut ArgCursor<'_>, slot: &'static str) -> ValueResult<Numeric> {
    match cursor.take() {
        Some(Node::Number(value)) => Ok(Numeric {
            value: *value,
            percent: false,
        }),
        Some(Node::Percentage(value)) => Ok(Numeric {
            value: *value,
            percent: true,
        }),
        Some(other) => Err(ValueError::syntax(slot, other.describe()).into()),
        None => Err(ValueError::syntax(slot, "end of arguments").into()),
    }
}

/// Consume a channel, mapping `100%` to `percent_scale * 100` and clamping
/// the result into `[min, max]`.
fn take_channel(
    cursor: &mut ArgCursor<'_>,
    slot: &'static str,
    percent_scale: f64,
    min: f64,
    max: f64,
) -> ValueResult<f64> {
    let numeric = take_numeric(cursor, slot)?;
    let value = if numeric.percent {
        numeric.value * percent_scale
    } else {
        numeric.value
    };
    Ok(value.clamp(min, max))
}

/// Consume a `<hue>` channel.
///
/// [§ 7.1](https://www.w3.org/TR/css-color-4/#typedef-hue): "It is first
/// given as an `<angle>`... or as a `<number>`, which is interpreted as a
/// number of degrees." A percentage is never a hue.
fn take_hue(cursor: &mut ArgCursor<'_>) -> ValueResult<f64> {
    match cursor.take() {
        Some(node @ (Node::Number(_) | Node::Dimension { .. })) => {
            Ok(angle::parse_angle(node)?.degrees())
        }
        Some(other) => Err(ValueError::syntax("a number or angle for hue", other.describe()).into()),
        None => Err(ValueError::syntax("a number or angle for hue", "end of arguments").into()),
    }
}

/// Consume the legacy comma between fixed-arity channels, if in legacy mode.
fn channel_separator(cursor: &mut ArgCursor<'_>) -> ValueResult<()> {
    if cursor.is_legacy() {
        cursor.expect_comma()?;
    }
    Ok(())
}

/// Consume the optional trailing alpha.
///
/// Unlike channels, alpha rejects out-of-range values instead of clamping,
/// and a fully opaque alpha normalizes to `None` so generation can omit it.
fn take_alpha(cursor: &mut ArgCursor<'_>) -> ValueResult<Option<f64>> {
    if !cursor.skip_if_slash_or_comma() {
        return Ok(None);
    }

    let value = match cursor.take() {
        Some(Node::Number(value)) => {
            if !(0.0..=1.0).contains(value) {
                return Err(ValueError::Range {
                    slot: "alpha",
                    value: *value,
                    min: 0.0,
                    max: 1.0,
                }
                .into());
            }
            *value
        }
        Some(Node::Percentage(value)) => {
            if !(0.0..=100.0).contains(value) {
                return Err(ValueError::Range {
                    slot: "alpha",
                    value: *value,
                    min: 0.0,
                    max: 100.0,
                }
                .into());
            }
            value / 100.0
        }
        Some(other) => {
            return Err(ValueError::syntax("an alpha number or percentage", other.describe()).into());
        }
        None => {
            return Err(
                ValueError::syntax("an alpha number or percentage", "end of arguments").into(),
            );
        }
    };

    if value >= 1.0 {
        return Ok(None);
    }
    Ok(Some(value))
}

/// [§ 4.1 rgb()](https://www.w3.org/TR/css-color-4/#rgb-functions)
fn parse_rgb(cursor: &mut ArgCursor<'_>) -> ValueResult<Color> {
    let red = take_rgb_channel(cursor, "the red channel")?;
    channel_separator(cursor)?;
    let green = take_rgb_channel(cursor, "the green channel")?;
    channel_separator(cursor)?;
    let blue = take_rgb_channel(cursor, "the blue channel")?;
    let alpha = take_alpha(cursor)?;
    Ok(Color::Rgb(Rgb {
        red,
        green,
        blue,
        alpha,
    }))
}

/// Map one rgb channel to its 8-bit value: `100%` is 255, clamp, round.
///
/// The percentage maps through `/ 100 * 255` rather than a pre-divided
/// factor so half-channel values like `50%` land exactly on `127.5` and
/// round up.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn take_rgb_channel(cursor: &mut ArgCursor<'_>, slot: &'static str) -> ValueResult<u8> {
    let numeric = take_numeric(cursor, slot)?;
    let value = if numeric.percent {
        numeric.value / 100.0 * 255.0
    } else {
        numeric.value
    };
    Ok(value.clamp(0.0, 255.0).round() as u8)
}

/// [§ 7 hsl()](https://www.w3.org/TR/css-color-4/#the-hsl-notation)
fn parse_hsl(cursor: &mut ArgCursor<'_>) -> ValueResult<Color> {
    let hue = take_hue(cursor)?;
    channel_separator(cursor)?;
    let saturation = take_channel(cursor, "the saturation channel", 1.0, 0.0, 100.0)?;
    channel_separator(cursor)?;
    let lightness = take_channel(cursor, "the lightness channel", 1.0, 0.0, 100.0)?;
    let alpha = take_alpha(cursor)?;
    Ok(Color::Hsl(Hsl {
        hue,
        saturation,
        lightness,
        alpha,
    }))
}

/// [§ 8 hwb()](https://www.w3.org/TR/css-color-4/#the-hwb-notation)
fn parse_hwb(cursor: &mut ArgCursor<'_>) -> ValueResult<Color> {
    let hue = take_hue(cursor)?;
    let whiteness = take_channel(cursor, "the whiteness channel", 1.0, 0.0, 100.0)?;
    let blackness = take_channel(cursor, "the blackness channel", 1.0, 0.0, 100.0)?;
    let alpha = take_alpha(cursor)?;
    Ok(Color::Hwb(Hwb {
        hue,
        whiteness,
        blackness,
        alpha,
    }))
}

/// [§ 9.1 lab()](https://www.w3.org/TR/css-color-4/#specifying-lab-lch)
///
/// "For the a and b axes ... 100% = 125, -100% = -125."
fn parse_lab(cursor: &mut ArgCursor<'_>) -> ValueResult<Color> {
    let lightness = take_channel(cursor, "the lab lightness channel", 1.0, 0.0, 100.0)?;
    let a = take_channel(cursor, "the lab a axis", 1.25, -125.0, 125.0)?;
    let b = take_channel(cursor, "the lab b axis", 1.25, -125.0, 125.0)?;
    let alpha = take_alpha(cursor)?;
    Ok(Color::Lab(Lab {
        lightness,
        a,
        b,
        alpha,
    }))
}

/// [§ 9.2 lch()](https://www.w3.org/TR/css-color-4/#specifying-lab-lch)
///
/// "For the chroma, 100% = 150, and 0% = 0."
fn parse_lch(cursor: &mut ArgCursor<'_>) -> ValueResult<Color> {
    let lightness = take_channel(cursor, "the lch lightness channel", 1.0, 0.0, 100.0)?;
    let chroma = take_channel(cursor, "the chroma channel", 1.5, 0.0, 150.0)?;
    let hue = take_hue(cursor)?;
    let alpha = take_alpha(cursor)?;
    Ok(Color::Lch(Lch {
        lightness,
        chroma,
        hue,
        alpha,
    }))
}

/// [§ 9.3 oklab()](https://www.w3.org/TR/css-color-4/#specifying-oklab-oklch)
///
/// Lightness runs 0 to 1 here, so `100%` maps to 1; the axes map
/// `100% = 0.4`.
fn parse_oklab(cursor: &mut ArgCursor<'_>) -> ValueResult<Color> {
    let lightness = take_channel(cursor, "the oklab lightness channel", 0.01, 0.0, 1.0)?;
    let a = take_channel(cursor, "the oklab a axis", 0.004, -0.4, 0.4)?;
    let b = take_channel(cursor, "the oklab b axis", 0.004, -0.4, 0.4)?;
    let alpha = take_alpha(cursor)?;
    Ok(Color::Oklab(Oklab {
        lightness,
        a,
        b,
        alpha,
    }))
}

/// [§ 9.4 oklch()](https://www.w3.org/TR/css-color-4/#specifying-oklab-oklch)
fn parse_oklch(cursor: &mut ArgCursor<'_>) -> ValueResult<Color> {
    let lightness = take_channel(cursor, "the oklch lightness channel", 0.01, 0.0, 1.0)?;
    let chroma = take_channel(cursor, "the oklch chroma channel", 0.004, 0.0, 0.4)?;
    let hue = take_hue(cursor)?;
    let alpha = take_alpha(cursor)?;
    Ok(Color::Oklch(Oklch {
        lightness,
        chroma,
        hue,
        alpha,
    }))
}

/// [§ 10.1 color()](https://www.w3.org/TR/css-color-4/#color-function)
///
/// The space must come from the predefined catalog; the channels themselves
/// are stored as written ("values outside the range are permitted, and
/// represent colors outside the gamut").
fn parse_color_function(cursor: &mut ArgCursor<'_>) -> ValueResult<Color> {
    let space = match cursor.take() {
        Some(node @ Node::Ident(name)) => {
            catalog::canonical_keyword(catalog::PREDEFINED_COLOR_SPACES, name)
                .ok_or_else(|| ValueError::syntax("a predefined color space", node.describe()))?
                .to_string()
        }
        Some(other) => {
            return Err(ValueError::syntax("a predefined color space", other.describe()).into());
        }
        None => {
            return Err(ValueError::syntax("a predefined color space", "end of arguments").into());
        }
    };

    let mut channels = Vec::new();
    while matches!(cursor.peek(), Some(Node::Number(_) | Node::Percentage(_))) {
        let numeric = take_numeric(cursor, "a color() channel")?;
        channels.push(if numeric.percent {
            numeric.value / 100.0
        } else {
            numeric.value
        });
    }
    if channels.is_empty() {
        return Err(ValueError::Arity {
            slot: "color() channels",
            expected: "at least 1 channel value",
            found: 0,
        }
        .into());
    }

    let alpha = take_alpha(cursor)?;
    Ok(Color::Function(ColorFunction {
        space,
        channels,
        alpha,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_shorthand_expands() {
        let color = Color::parse("#F00").unwrap();
        assert_eq!(color, Color::Hex("ff0000".to_string()));
    }

    #[test]
    fn test_hex_opaque_alpha_dropped() {
        let color = Color::parse("#ff0000ff").unwrap();
        assert_eq!(color, Color::Hex("ff0000".to_string()));
    }

    #[test]
    fn test_legacy_comma_rejected_outside_rgb_hsl() {
        assert!(Color::parse("hwb(120, 0%, 0%)").is_err());
        assert!(Color::parse("lab(50, 0, 0)").is_err());
    }

    #[test]
    fn test_rgb_percentage_channels() {
        match Color::parse("rgb(100% 0% 50%)").unwrap() {
            Color::Rgb(rgb) => {
                assert_eq!(rgb.red, 255);
                assert_eq!(rgb.green, 0);
                assert_eq!(rgb.blue, 128);
            }
            other => panic!("Expected rgb, got {other:?}"),
        }
    }

    #[test]
    fn test_rgb_half_percentages_round_up() {
        // 50% of 255 is exactly 127.5, which must round to 128.
        match Color::parse("rgb(50% 50% 50%)").unwrap() {
            Color::Rgb(rgb) => {
                assert_eq!(rgb.red, 128);
                assert_eq!(rgb.green, 128);
                assert_eq!(rgb.blue, 128);
            }
            other => panic!("Expected rgb, got {other:?}"),
        }
    }

    #[test]
    fn test_hue_rejects_percentage() {
        assert!(Color::parse("hsl(50% 100% 50%)").is_err());
    }

    #[test]
    fn test_alpha_out_of_range_rejected() {
        let issues = Color::parse("rgb(0 0 0 / 1.5)").unwrap_err();
        assert_eq!(
            issues.primary().kind(),
            crate::error::ErrorKind::Range
        );
    }

    #[test]
    fn test_channel_clamping() {
        match Color::parse("lab(150% 200 -300)").unwrap() {
            Color::Lab(lab) => {
                assert_eq!(lab.lightness, 100.0);
                assert_eq!(lab.a, 125.0);
                assert_eq!(lab.b, -125.0);
            }
            other => panic!("Expected lab, got {other:?}"),
        }
    }

    #[test]
    fn test_color_function_space_catalog() {
        assert!(Color::parse("color(display-p3 1 0 0)").is_ok());
        assert!(Color::parse("color(notaspace 1 0 0)").is_err());
    }
}
