//! JSON serialization of the IR types.
//!
//! Downstream tooling inspects parsed values as JSON, so the field names
//! and enum shapes of the `Serialize` derives are part of the contract.

use serde_json::json;
use sepia_css::{BoxShadow, Color, Gradient};

#[test]
fn test_color_serializes_with_channel_fields() {
    let color = Color::parse("rgb(255 0 0 / 0.5)").unwrap();
    let value = serde_json::to_value(&color).unwrap();
    assert_eq!(
        value,
        json!({
            "Rgb": {
                "red": 255,
                "green": 0,
                "blue": 0,
                "alpha": 0.5
            }
        })
    );
}

#[test]
fn test_gradient_stop_shape() {
    let gradient = Gradient::parse("linear-gradient(red, blue 50%)").unwrap();
    let value = serde_json::to_value(&gradient).unwrap();
    let stops = &value["Linear"]["stops"];
    assert_eq!(stops[0]["color"], json!({ "Named": "red" }));
    assert_eq!(
        stops[1]["position"],
        json!({ "LengthPercentage": { "Percentage": 50.0 } })
    );
    assert_eq!(value["Linear"]["repeating"], json!(false));
}

#[test]
fn test_shadow_layer_fields() {
    let shadow = BoxShadow::parse("inset 1px 2px").unwrap();
    let value = serde_json::to_value(&shadow).unwrap();
    let layer = &value["layers"][0];
    assert_eq!(layer["inset"], json!(true));
    assert_eq!(layer["offset_x"], json!({ "value": 1.0, "unit": "px" }));
    assert_eq!(layer["blur_radius"], json!(null));
    assert_eq!(layer["color"], json!(null));
}
