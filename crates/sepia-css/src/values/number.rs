//! Canonical number formatting.
//!
//! [§ 6 Serialization](https://www.w3.org/TR/css-syntax-3/#serialization)
//! leaves numeric precision to the implementation; this crate's rule is the
//! minimum digits that round-trip: trailing zeros are trimmed, then a
//! trailing decimal point, and negative zero never appears.

/// Render a number with the minimum digits that round-trip.
///
/// Rust's `f64` `Display` already produces the shortest decimal string that
/// parses back to the same value and never uses scientific notation, so the
/// only normalization left is erasing negative zero.
#[must_use]
pub fn fmt_number(value: f64) -> String {
    // `-0.0 == 0.0` is true, so this catches exactly the negative-zero case.
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_point() {
        assert_eq!(fmt_number(100.0), "100");
        assert_eq!(fmt_number(0.0), "0");
    }

    #[test]
    fn test_fractions_keep_minimum_digits() {
        assert_eq!(fmt_number(0.5), "0.5");
        assert_eq!(fmt_number(12.25), "12.25");
    }

    #[test]
    fn test_negative_zero_is_erased() {
        assert_eq!(fmt_number(-0.0), "0");
    }
}
