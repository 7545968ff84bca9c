//! Integration tests for the shadow family.

use sepia_css::error::ErrorKind;
use sepia_css::values::Length;
use sepia_css::{BoxShadow, Color, TextShadow};

#[test]
fn test_two_layer_example() {
    let shadow = BoxShadow::parse("2px 2px 4px black, inset 0 0 10px white").unwrap();
    assert_eq!(shadow.layers.len(), 2);

    let first = &shadow.layers[0];
    assert!(!first.inset);
    assert_eq!(first.offset_x, Length::new(2.0, "px"));
    assert_eq!(first.blur_radius, Some(Length::new(4.0, "px")));
    assert_eq!(first.spread_radius, None);
    assert_eq!(first.color, Some(Color::Named("black".to_string())));

    let second = &shadow.layers[1];
    assert!(second.inset);
    assert_eq!(second.offset_x, Length::zero());
    assert_eq!(second.blur_radius, Some(Length::new(10.0, "px")));
}

#[test]
fn test_canonical_order_inset_first_color_last() {
    let shadow = BoxShadow::parse("red 2px 3px inset").unwrap();
    assert_eq!(shadow.to_css(), "inset 2px 3px red");
}

#[test]
fn test_four_length_layer() {
    let shadow = BoxShadow::parse("1px 2px 3px 4px").unwrap();
    let layer = &shadow.layers[0];
    assert_eq!(layer.blur_radius, Some(Length::new(3.0, "px")));
    assert_eq!(layer.spread_radius, Some(Length::new(4.0, "px")));
}

#[test]
fn test_zero_lengths_get_default_unit() {
    let shadow = BoxShadow::parse("0 0 5px red").unwrap();
    assert_eq!(shadow.to_css(), "0px 0px 5px red");
}

#[test]
fn test_duplicate_slots_are_arity_errors() {
    let issues = BoxShadow::parse("inset 1px 1px inset").unwrap_err();
    assert_eq!(issues.primary().kind(), ErrorKind::Arity);

    let issues = BoxShadow::parse("red 1px 1px blue").unwrap_err();
    assert_eq!(issues.primary().kind(), ErrorKind::Arity);
}

#[test]
fn test_length_run_bounds() {
    let issues = BoxShadow::parse("1px").unwrap_err();
    assert_eq!(issues.primary().kind(), ErrorKind::Arity);

    let issues = BoxShadow::parse("1px 2px 3px 4px 5px").unwrap_err();
    assert_eq!(issues.primary().kind(), ErrorKind::Arity);

    // Text shadows stop at three lengths.
    let issues = TextShadow::parse("1px 2px 3px 4px").unwrap_err();
    assert_eq!(issues.primary().kind(), ErrorKind::Arity);
}

#[test]
fn test_text_shadow_layers() {
    let shadow = TextShadow::parse("1px 1px 2px #000, 0 0 1em blue").unwrap();
    assert_eq!(shadow.layers.len(), 2);
    assert_eq!(shadow.layers[1].blur_radius, Some(Length::new(1.0, "em")));
    assert_eq!(shadow.to_css(), "1px 1px 2px #000000, 0px 0px 1em blue");
}

#[test]
fn test_none_round_trips() {
    let shadow = BoxShadow::parse("none").unwrap();
    assert!(shadow.layers.is_empty());
    assert_eq!(shadow.to_css(), "none");

    let shadow = TextShadow::parse("NONE").unwrap();
    assert_eq!(shadow.to_css(), "none");
}

#[test]
fn test_percentage_rejected() {
    assert!(BoxShadow::parse("10% 10%").is_err());
}

#[test]
fn test_shadow_color_functions() {
    let shadow = BoxShadow::parse("2px 2px rgba(0, 0, 0, 0.25)").unwrap();
    assert_eq!(shadow.to_css(), "2px 2px rgb(0 0 0 / 0.25)");
}
