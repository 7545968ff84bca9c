//! Canonical text generation for gradients.
//!
//! Clauses are emitted in the grammar's fixed order regardless of the order
//! the input used, the `in <color-space>` clause always lands last before
//! the stop list, and a comma precedes the stops only when at least one
//! clause was emitted.

use super::{
    ColorStop, ConicGradient, Gradient, LineDirection, LinearGradient, RadialGradient,
};

impl Gradient {
    /// Canonical text form.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Linear(gradient) => gradient.to_css(),
            Self::Radial(gradient) => gradient.to_css(),
            Self::Conic(gradient) => gradient.to_css(),
        }
    }
}

impl LineDirection {
    /// Canonical text form (`45deg`, `to left`, `to right bottom`).
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Angle(angle) => angle.to_css(),
            Self::Side {
                horizontal,
                vertical,
            } => {
                let mut out = "to".to_string();
                if let Some(side) = horizontal {
                    out.push(' ');
                    out.push_str(&side.to_string());
                }
                if let Some(side) = vertical {
                    out.push(' ');
                    out.push_str(&side.to_string());
                }
                out
            }
        }
    }
}

impl LinearGradient {
    /// Canonical text form.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut clauses = Vec::new();
        if let Some(direction) = &self.direction {
            clauses.push(direction.to_css());
        }
        assemble(
            if self.repeating {
                "repeating-linear-gradient"
            } else {
                "linear-gradient"
            },
            clauses,
            self.color_space.as_deref(),
            &self.stops,
        )
    }
}

impl RadialGradient {
    /// Canonical text form: shape and size first, then `at <position>`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut clauses = Vec::new();

        let mut shape_size = Vec::new();
        if let Some(shape) = self.shape {
            shape_size.push(shape.to_string());
        }
        if let Some(size) = &self.size {
            shape_size.push(size.to_css());
        }
        if !shape_size.is_empty() {
            clauses.push(shape_size.join(" "));
        }

        if let Some(position) = &self.position {
            clauses.push(format!("at {}", position.to_css()));
        }

        assemble(
            if self.repeating {
                "repeating-radial-gradient"
            } else {
                "radial-gradient"
            },
            clauses,
            self.color_space.as_deref(),
            &self.stops,
        )
    }
}

impl ConicGradient {
    /// Canonical text form: `from <angle>` first, then `at <position>`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut clauses = Vec::new();
        if let Some(angle) = &self.from_angle {
            clauses.push(format!("from {}", angle.to_css()));
        }
        if let Some(position) = &self.position {
            clauses.push(format!("at {}", position.to_css()));
        }
        assemble(
            if self.repeating {
                "repeating-conic-gradient"
            } else {
                "conic-gradient"
            },
            clauses,
            self.color_space.as_deref(),
            &self.stops,
        )
    }
}

/// Join clauses, the trailing `in <space>` clause, and the stop list into
/// one function call.
fn assemble(
    name: &str,
    mut clauses: Vec<String>,
    color_space: Option<&str>,
    stops: &[ColorStop],
) -> String {
    if let Some(space) = color_space {
        clauses.push(format!("in {space}"));
    }

    let stop_list = stops
        .iter()
        .map(ColorStop::to_css)
        .collect::<Vec<_>>()
        .join(", ");

    if clauses.is_empty() {
        format!("{name}({stop_list})")
    } else {
        format!("{name}({}, {stop_list})", clauses.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_radial_round_trips() {
        let text = "radial-gradient(circle 100px, red, blue)";
        let gradient = Gradient::parse(text).unwrap();
        assert_eq!(gradient.to_css(), text);
    }

    #[test]
    fn test_clause_order_is_fixed() {
        // `in` written first regenerates after the direction.
        let gradient = Gradient::parse("linear-gradient(in oklab, red, blue)").unwrap();
        assert_eq!(gradient.to_css(), "linear-gradient(in oklab, red, blue)");

        let gradient =
            Gradient::parse("conic-gradient(from 0.5turn in hsl, red, blue)").unwrap();
        assert_eq!(
            gradient.to_css(),
            "conic-gradient(from 180deg in hsl, red, blue)"
        );
    }

    #[test]
    fn test_repeating_prefix_regenerates() {
        let text = "repeating-conic-gradient(red 0deg, blue 90deg)";
        let gradient = Gradient::parse(text).unwrap();
        assert_eq!(gradient.to_css(), text);
    }
}
