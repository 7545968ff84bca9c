//! Canonicalization and round-trip properties shared by all three families.
//!
//! Canonical text is a fixed point: parsing a generated string and
//! generating again never changes the text, and parsing it yields the same
//! IR.

use sepia_css::values::wrap_degrees;
use sepia_css::{BoxShadow, Color, Gradient, TextShadow};

fn assert_color_fixed_point(input: &str) {
    let ir = Color::parse(input).unwrap();
    let text = ir.to_css();
    let reparsed = Color::parse(&text).unwrap();
    assert_eq!(reparsed, ir, "IR drifted for {input}");
    assert_eq!(reparsed.to_css(), text, "text drifted for {input}");
}

fn assert_gradient_fixed_point(input: &str) {
    let ir = Gradient::parse(input).unwrap();
    let text = ir.to_css();
    let reparsed = Gradient::parse(&text).unwrap();
    assert_eq!(reparsed, ir, "IR drifted for {input}");
    assert_eq!(reparsed.to_css(), text, "text drifted for {input}");
}

#[test]
fn test_color_canonical_fixed_points() {
    assert_color_fixed_point("rgba(255, 0, 0, 0.5)");
    assert_color_fixed_point("hsl(450 100% 50%)");
    assert_color_fixed_point("hwb(240 20% 10% / 25%)");
    assert_color_fixed_point("lab(50% -30 40)");
    assert_color_fixed_point("lch(52.2 72.2 50)");
    assert_color_fixed_point("oklab(0.5 0.1 -0.1)");
    assert_color_fixed_point("oklch(70% 0.1 250)");
    assert_color_fixed_point("color(display-p3 1 0 0.5)");
    assert_color_fixed_point("#AbCdEf");
    assert_color_fixed_point("rebeccapurple");
    assert_color_fixed_point("currentColor");
}

#[test]
fn test_gradient_canonical_fixed_points() {
    assert_gradient_fixed_point("linear-gradient(red, blue)");
    assert_gradient_fixed_point("linear-gradient(45deg, red 0%, blue 100%)");
    assert_gradient_fixed_point("linear-gradient(to top left, red, blue)");
    assert_gradient_fixed_point("radial-gradient(circle 100px, red, blue)");
    assert_gradient_fixed_point(
        "radial-gradient(ellipse 40% 60% at 20% 30%, red, green, blue)",
    );
    assert_gradient_fixed_point("radial-gradient(farthest-corner at left bottom, red, blue)");
    assert_gradient_fixed_point("conic-gradient(from 45deg at 50% 50%, red, blue)");
    assert_gradient_fixed_point("repeating-linear-gradient(red, blue 20%)");
    assert_gradient_fixed_point("repeating-radial-gradient(closest-side, red, blue)");
    assert_gradient_fixed_point("linear-gradient(in oklab, red, blue)");
}

#[test]
fn test_shadow_canonical_fixed_points() {
    for input in [
        "2px 2px 4px black, inset 0 0 10px white",
        "none",
        "1px 1px",
        "0 0 1em 2px rgb(0 0 0 / 0.5)",
    ] {
        let ir = BoxShadow::parse(input).unwrap();
        let text = ir.to_css();
        let reparsed = BoxShadow::parse(&text).unwrap();
        assert_eq!(reparsed, ir, "IR drifted for {input}");
        assert_eq!(reparsed.to_css(), text, "text drifted for {input}");
    }

    let ir = TextShadow::parse("1px 1px 2px red, 0 0 5px").unwrap();
    let text = ir.to_css();
    assert_eq!(TextShadow::parse(&text).unwrap(), ir);
}

#[test]
fn test_explicit_radial_reproduces_input_exactly() {
    let text = "radial-gradient(circle 100px, red, blue)";
    assert_eq!(Gradient::parse(text).unwrap().to_css(), text);
}

#[test]
fn test_hue_wrap_modular_law() {
    for hue in [-720.0, -360.0, -90.0, 0.0, 45.0, 360.0, 450.0, 1080.0] {
        let wrapped = wrap_degrees(hue);
        assert!((0.0..360.0).contains(&wrapped), "wrap({hue}) = {wrapped}");
        assert_eq!(wrap_degrees(hue + 360.0), wrapped);
        assert_eq!(wrap_degrees(wrapped), wrapped);
    }
    assert!(wrap_degrees(-360.0).is_sign_positive());
}

#[test]
fn test_clamping_is_idempotent() {
    let clamped = Color::parse("rgb(300 -20 0)").unwrap();
    let again = Color::parse(&clamped.to_css()).unwrap();
    assert_eq!(clamped, again);

    let clamped = Color::parse("lab(150% 200 -300)").unwrap();
    let again = Color::parse(&clamped.to_css()).unwrap();
    assert_eq!(clamped, again);
}

#[test]
fn test_alpha_canonicalization_is_idempotent() {
    // Opaque alpha disappears and stays gone.
    let color = Color::parse("rgb(1 2 3 / 1)").unwrap();
    let text = color.to_css();
    assert_eq!(text, "rgb(1 2 3)");
    assert_eq!(Color::parse(&text).unwrap().to_css(), text);

    // Fractional alpha survives unchanged.
    let color = Color::parse("hsl(120, 50%, 50%, 0.25)").unwrap();
    let text = color.to_css();
    assert_eq!(text, "hsl(120 50% 50% / 0.25)");
    assert_eq!(Color::parse(&text).unwrap().to_css(), text);
}

#[test]
fn test_number_formatting_trims() {
    assert_eq!(Color::parse("hsl(90.0 50.50% 50%)").unwrap().to_css(), "hsl(90 50.5% 50%)");
}
