//! Canonical text generation for the color family.
//!
//! [§ 15 Serializing colors](https://www.w3.org/TR/css-color-4/#serializing-color-values)
//!
//! Legacy-parsed values always regenerate in modern space-separated form,
//! alpha is omitted when absent, and hue serializes as a bare number of
//! degrees.

use crate::values::number::fmt_number;

use super::{Color, ColorFunction, Hsl, Hwb, Lab, Lch, Oklab, Oklch, Rgb};

/// Render the ` / a` suffix, or nothing for an opaque color.
fn alpha_suffix(alpha: Option<f64>) -> String {
    alpha.map_or_else(String::new, |a| format!(" / {}", fmt_number(a)))
}

impl Color {
    /// Canonical text form.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(digits) => format!("#{digits}"),
            Self::Named(name) | Self::System(name) => name.clone(),
            Self::Special(special) => special.to_string(),
            Self::Rgb(rgb) => rgb.to_css(),
            Self::Hsl(hsl) => hsl.to_css(),
            Self::Hwb(hwb) => hwb.to_css(),
            Self::Lab(lab) => lab.to_css(),
            Self::Lch(lch) => lch.to_css(),
            Self::Oklab(oklab) => oklab.to_css(),
            Self::Oklch(oklch) => oklch.to_css(),
            Self::Function(function) => function.to_css(),
        }
    }
}

impl Rgb {
    /// `rgb(r g b)` or `rgb(r g b / a)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "rgb({} {} {}{})",
            self.red,
            self.green,
            self.blue,
            alpha_suffix(self.alpha)
        )
    }
}

impl Hsl {
    /// `hsl(h s% l%)`, hue as a bare degree number.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "hsl({} {}% {}%{})",
            fmt_number(self.hue),
            fmt_number(self.saturation),
            fmt_number(self.lightness),
            alpha_suffix(self.alpha)
        )
    }
}

impl Hwb {
    /// `hwb(h w% b%)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "hwb({} {}% {}%{})",
            fmt_number(self.hue),
            fmt_number(self.whiteness),
            fmt_number(self.blackness),
            alpha_suffix(self.alpha)
        )
    }
}

impl Lab {
    /// `lab(L a b)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "lab({} {} {}{})",
            fmt_number(self.lightness),
            fmt_number(self.a),
            fmt_number(self.b),
            alpha_suffix(self.alpha)
        )
    }
}

impl Lch {
    /// `lch(L C h)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "lch({} {} {}{})",
            fmt_number(self.lightness),
            fmt_number(self.chroma),
            fmt_number(self.hue),
            alpha_suffix(self.alpha)
        )
    }
}

impl Oklab {
    /// `oklab(L a b)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "oklab({} {} {}{})",
            fmt_number(self.lightness),
            fmt_number(self.a),
            fmt_number(self.b),
            alpha_suffix(self.alpha)
        )
    }
}

impl Oklch {
    /// `oklch(L C h)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "oklch({} {} {}{})",
            fmt_number(self.lightness),
            fmt_number(self.chroma),
            fmt_number(self.hue),
            alpha_suffix(self.alpha)
        )
    }
}

impl ColorFunction {
    /// `color(space c1 c2 c3)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let channels = self
            .channels
            .iter()
            .map(|c| fmt_number(*c))
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "color({} {}{})",
            self.space,
            channels,
            alpha_suffix(self.alpha)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_regenerates_modern() {
        let color = Color::parse("rgba(255, 0, 0, 0.5)").unwrap();
        assert_eq!(color.to_css(), "rgb(255 0 0 / 0.5)");
    }

    #[test]
    fn test_opaque_alpha_omitted() {
        let color = Color::parse("hsl(120 100% 50% / 1)").unwrap();
        assert_eq!(color.to_css(), "hsl(120 100% 50%)");
    }

    #[test]
    fn test_hue_wraps_before_output() {
        let color = Color::parse("hsl(450 100% 50%)").unwrap();
        assert_eq!(color.to_css(), "hsl(90 100% 50%)");
    }
}
