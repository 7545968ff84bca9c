//! Static keyword and unit catalogs.
//!
//! These tables are immutable for the process lifetime and are consulted by
//! the grammar dispatchers; none of them is re-allocated per call. The
//! grammars themselves live elsewhere — this module only answers "is this
//! identifier legal here".

/// [§ 6.1 Distance Units](https://www.w3.org/TR/css-values-4/#lengths)
///
/// Length units accepted in shadow offsets, gradient stop positions, and
/// explicit radial sizes.
pub const LENGTH_UNITS: &[&str] = &[
    // [§ 6.2 Absolute lengths](https://www.w3.org/TR/css-values-4/#absolute-lengths)
    "px", "cm", "mm", "q", "in", "pt", "pc",
    // [§ 6.1.1 Font-relative lengths](https://www.w3.org/TR/css-values-4/#font-relative-lengths)
    "em", "rem", "ex", "ch",
    // [§ 6.1.2 Viewport-percentage lengths](https://www.w3.org/TR/css-values-4/#viewport-relative-lengths)
    "vw", "vh", "vmin", "vmax",
];

/// [§ 12.2 Interpolation color spaces](https://www.w3.org/TR/css-color-4/#interpolation-space)
///
/// Legal values for a gradient's `in <color-space>` clause.
pub const INTERPOLATION_COLOR_SPACES: &[&str] = &[
    "srgb",
    "srgb-linear",
    "display-p3",
    "a98-rgb",
    "prophoto-rgb",
    "rec2020",
    "lab",
    "oklab",
    "xyz",
    "xyz-d50",
    "xyz-d65",
    "hsl",
    "hwb",
    "lch",
    "oklch",
];

/// [§ 10.1 Predefined color spaces](https://www.w3.org/TR/css-color-4/#predefined)
///
/// Legal first arguments of the `color()` function.
pub const PREDEFINED_COLOR_SPACES: &[&str] = &[
    "srgb",
    "srgb-linear",
    "display-p3",
    "a98-rgb",
    "prophoto-rgb",
    "rec2020",
    "xyz",
    "xyz-d50",
    "xyz-d65",
];

/// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
///
/// The basic named colors plus the handful of extended names that show up
/// constantly in real stylesheets. Not the full X11 table.
pub const NAMED_COLORS: &[&str] = &[
    "aqua",
    "black",
    "blue",
    "brown",
    "cyan",
    "fuchsia",
    "gold",
    "gray",
    "green",
    "grey",
    "indigo",
    "lime",
    "magenta",
    "maroon",
    "navy",
    "olive",
    "orange",
    "pink",
    "purple",
    "rebeccapurple",
    "red",
    "silver",
    "teal",
    "violet",
    "white",
    "yellow",
];

/// [§ 6.2 System Colors](https://www.w3.org/TR/css-color-4/#css-system-colors)
///
/// "In general, the <system-color> keywords reflect default color choices
/// made by the user, the browser, or the OS."
pub const SYSTEM_COLORS: &[&str] = &[
    "accentcolor",
    "accentcolortext",
    "activetext",
    "buttonborder",
    "buttonface",
    "buttontext",
    "canvas",
    "canvastext",
    "field",
    "fieldtext",
    "graytext",
    "highlight",
    "highlighttext",
    "linktext",
    "mark",
    "marktext",
    "selecteditem",
    "selecteditemtext",
    "visitedtext",
];

/// Case-insensitive membership test against a catalog table.
///
/// Returns the canonical (table) spelling on a hit so callers store one
/// deterministic form regardless of input case.
#[must_use]
pub fn canonical_keyword<'a>(table: &[&'a str], name: &str) -> Option<&'a str> {
    table
        .iter()
        .find(|entry| entry.eq_ignore_ascii_case(name))
        .copied()
}

/// Is this identifier a known length unit?
#[must_use]
pub fn is_length_unit(unit: &str) -> bool {
    canonical_keyword(LENGTH_UNITS, unit).is_some()
}

/// Is this identifier a known named color?
#[must_use]
pub fn is_named_color(name: &str) -> bool {
    canonical_keyword(NAMED_COLORS, name).is_some()
}

/// Is this identifier a known system color?
#[must_use]
pub fn is_system_color(name: &str) -> bool {
    canonical_keyword(SYSTEM_COLORS, name).is_some()
}
