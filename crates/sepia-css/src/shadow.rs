//! Shadow values per
//! [CSS Backgrounds 3 § 7.2](https://www.w3.org/TR/css-backgrounds-3/#box-shadow)
//! and [CSS Text Decoration 3 § 4](https://www.w3.org/TR/css-text-decor-3/#text-shadow-property).
//!
//! "The components of each `<shadow>` may be specified in any order", so a
//! layer has no positional grammar: each node is classified by its
//! syntactic kind in one scan. The `inset` keyword fills the inset slot, a
//! numeric run fills the length slots in order (x offset, y offset, blur,
//! spread), and anything else must be the layer's color. A slot filled
//! twice is a hard error.
//!
//! Canonical output fixes the order regardless of input: `inset` first,
//! then the lengths, then the color.

use serde::Serialize;

use crate::color::{self, Color};
use crate::error::{ValueError, ValueResult};
use crate::node::{self, Node};
use crate::values::length::{self, Length};

/// One layer of a `box-shadow` value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxShadowLayer {
    /// Horizontal offset.
    pub offset_x: Length,
    /// Vertical offset.
    pub offset_y: Length,
    /// Blur radius, if written.
    pub blur_radius: Option<Length>,
    /// Spread distance, if written.
    pub spread_radius: Option<Length>,
    /// The shadow's color, if written.
    pub color: Option<Color>,
    /// "If present, the inset keyword changes the drop shadow to an inner
    /// shadow."
    pub inset: bool,
}

/// One layer of a `text-shadow` value. Text shadows have no spread and no
/// `inset`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextShadowLayer {
    /// Horizontal offset.
    pub offset_x: Length,
    /// Vertical offset.
    pub offset_y: Length,
    /// Blur radius, if written.
    pub blur_radius: Option<Length>,
    /// The shadow's color, if written.
    pub color: Option<Color>,
}

/// A full `box-shadow` value: zero (`none`) or more layers, nearest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxShadow {
    /// The layers; empty means `none`.
    pub layers: Vec<BoxShadowLayer>,
}

/// A full `text-shadow` value: zero (`none`) or more layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextShadow {
    /// The layers; empty means `none`.
    pub layers: Vec<TextShadowLayer>,
}

impl BoxShadow {
    /// Parse a `box-shadow` value.
    ///
    /// # Errors
    ///
    /// Returns an arity issue for a duplicate slot or a length run outside
    /// 2 to 4 values, and per-node issues otherwise.
    pub fn parse(text: &str) -> ValueResult<Self> {
        let nodes = node::parse_node_list(text)?;
        if is_none_keyword(&nodes) {
            return Ok(Self { layers: Vec::new() });
        }

        let mut layers = Vec::new();
        for group in node::split_comma_groups(&nodes)? {
            layers.push(parse_box_layer(group)?);
        }
        Ok(Self { layers })
    }

    /// Canonical text form; an empty layer list is `none`.
    #[must_use]
    pub fn to_css(&self) -> String {
        if self.layers.is_empty() {
            return "none".to_string();
        }
        self.layers
            .iter()
            .map(BoxShadowLayer::to_css)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl TextShadow {
    /// Parse a `text-shadow` value.
    ///
    /// # Errors
    ///
    /// Returns an arity issue for a duplicate color or a length run outside
    /// 2 to 3 values, and per-node issues otherwise.
    pub fn parse(text: &str) -> ValueResult<Self> {
        let nodes = node::parse_node_list(text)?;
        if is_none_keyword(&nodes) {
            return Ok(Self { layers: Vec::new() });
        }

        let mut layers = Vec::new();
        for group in node::split_comma_groups(&nodes)? {
            layers.push(parse_text_layer(group)?);
        }
        Ok(Self { layers })
    }

    /// Canonical text form; an empty layer list is `none`.
    #[must_use]
    pub fn to_css(&self) -> String {
        if self.layers.is_empty() {
            return "none".to_string();
        }
        self.layers
            .iter()
            .map(TextShadowLayer::to_css)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl BoxShadowLayer {
    /// Canonical text form: `inset` first, lengths, then the color.
    ///
    /// A spread with no written blur still needs a blur slot in the output,
    /// since the third length is always the blur; a `0px` placeholder keeps
    /// the text unambiguous.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut parts = Vec::new();
        if self.inset {
            parts.push("inset".to_string());
        }
        parts.push(self.offset_x.to_css());
        parts.push(self.offset_y.to_css());
        match (&self.blur_radius, &self.spread_radius) {
            (Some(blur), _) => parts.push(blur.to_css()),
            (None, Some(_)) => parts.push(Length::zero().to_css()),
            (None, None) => {}
        }
        if let Some(spread) = &self.spread_radius {
            parts.push(spread.to_css());
        }
        if let Some(color) = &self.color {
            parts.push(color.to_css());
        }
        parts.join(" ")
    }
}

impl TextShadowLayer {
    /// Canonical text form: lengths, then the color.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut parts = vec![self.offset_x.to_css(), self.offset_y.to_css()];
        if let Some(blur) = &self.blur_radius {
            parts.push(blur.to_css());
        }
        if let Some(color) = &self.color {
            parts.push(color.to_css());
        }
        parts.join(" ")
    }
}

/// Is the whole value the single `none` keyword?
fn is_none_keyword(nodes: &[Node]) -> bool {
    matches!(nodes, [Node::Ident(name)] if name.eq_ignore_ascii_case("none"))
}

/// The slots shared by both layer kinds, filled in one scan.
struct LayerParts {
    lengths: Vec<Length>,
    color: Option<Color>,
    inset: bool,
}

/// Classify each node of a layer group by its syntactic kind.
///
/// `allow_inset` is false for text shadows, where `inset` is not part of
/// the grammar and falls through to the color slot (and fails there).
fn scan_layer(group: &[Node], allow_inset: bool) -> ValueResult<LayerParts> {
    let mut lengths = Vec::new();
    let mut color = None;
    let mut inset = false;

    for node in group {
        match node {
            Node::Ident(name) if allow_inset && name.eq_ignore_ascii_case("inset") => {
                if inset {
                    return Err(ValueError::Arity {
                        slot: "the inset keyword",
                        expected: "at most 1 occurrence",
                        found: 2,
                    }
                    .into());
                }
                inset = true;
            }
            Node::Number(_) | Node::Dimension { .. } => lengths.push(length::parse_length(node)?),
            Node::Percentage(_) => {
                return Err(ValueError::syntax("a length", node.describe()).into());
            }
            other if color::is_color_node(other) => {
                if color.is_some() {
                    return Err(ValueError::Arity {
                        slot: "the shadow color",
                        expected: "at most 1 color",
                        found: 2,
                    }
                    .into());
                }
                color = Some(Color::from_node(other)?);
            }
            other => {
                return Err(ValueError::syntax("a shadow component", other.describe()).into());
            }
        }
    }

    Ok(LayerParts {
        lengths,
        color,
        inset,
    })
}

/// `<shadow> = <color>? && [ <length>{2} <length [0,∞]>? <length>? ] && inset?`
fn parse_box_layer(group: &[Node]) -> ValueResult<BoxShadowLayer> {
    let parts = scan_layer(group, true)?;
    let found = parts.lengths.len();
    if !(2..=4).contains(&found) {
        return Err(ValueError::Arity {
            slot: "box-shadow lengths",
            expected: "2 to 4 lengths",
            found,
        }
        .into());
    }

    let mut lengths = parts.lengths.into_iter();
    Ok(BoxShadowLayer {
        offset_x: lengths.next().unwrap_or_else(Length::zero),
        offset_y: lengths.next().unwrap_or_else(Length::zero),
        blur_radius: lengths.next(),
        spread_radius: lengths.next(),
        color: parts.color,
        inset: parts.inset,
    })
}

/// `text-shadow: none | [ <color>? && <length>{2,3} ]#`
fn parse_text_layer(group: &[Node]) -> ValueResult<TextShadowLayer> {
    let parts = scan_layer(group, false)?;
    let found = parts.lengths.len();
    if !(2..=3).contains(&found) {
        return Err(ValueError::Arity {
            slot: "text-shadow lengths",
            expected: "2 to 3 lengths",
            found,
        }
        .into());
    }

    let mut lengths = parts.lengths.into_iter();
    Ok(TextShadowLayer {
        offset_x: lengths.next().unwrap_or_else(Length::zero),
        offset_y: lengths.next().unwrap_or_else(Length::zero),
        blur_radius: lengths.next(),
        color: parts.color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_layer_box_shadow() {
        let shadow = BoxShadow::parse("2px 2px 4px black, inset 0 0 10px white").unwrap();
        assert_eq!(shadow.layers.len(), 2);
        assert!(!shadow.layers[0].inset);
        assert!(shadow.layers[1].inset);
        assert_eq!(shadow.layers[1].offset_x, Length::zero());
    }

    #[test]
    fn test_components_in_any_order() {
        let shadow = BoxShadow::parse("red 2px 2px inset").unwrap();
        let layer = &shadow.layers[0];
        assert!(layer.inset);
        assert_eq!(layer.color, Some(Color::Named("red".to_string())));
        assert_eq!(layer.to_css(), "inset 2px 2px red");
    }

    #[test]
    fn test_duplicate_inset_rejected() {
        assert!(BoxShadow::parse("inset 2px 2px inset").is_err());
    }

    #[test]
    fn test_duplicate_color_rejected() {
        assert!(BoxShadow::parse("red 2px 2px blue").is_err());
    }

    #[test]
    fn test_length_count_bounds() {
        assert!(BoxShadow::parse("2px").is_err());
        assert!(BoxShadow::parse("1px 2px 3px 4px 5px").is_err());
        assert!(TextShadow::parse("1px 2px 3px 4px").is_err());
    }

    #[test]
    fn test_none_is_empty() {
        let shadow = BoxShadow::parse("none").unwrap();
        assert!(shadow.layers.is_empty());
        assert_eq!(shadow.to_css(), "none");
    }

    #[test]
    fn test_spread_without_blur_regenerates_placeholder() {
        // The parser always fills blur before spread, so this IR shape is
        // only reachable by hand; it serializes a 0px blur and reparses to
        // the equivalent explicit-blur IR, which is then a fixed point.
        let layer = BoxShadowLayer {
            offset_x: Length::new(1.0, "px"),
            offset_y: Length::new(1.0, "px"),
            blur_radius: None,
            spread_radius: Some(Length::new(5.0, "px")),
            color: None,
            inset: false,
        };
        assert_eq!(layer.to_css(), "1px 1px 0px 5px");

        let reparsed = BoxShadow::parse(&layer.to_css()).unwrap();
        assert_eq!(reparsed.layers[0].blur_radius, Some(Length::zero()));
        assert_eq!(reparsed.to_css(), "1px 1px 0px 5px");
        assert_eq!(BoxShadow::parse(&reparsed.to_css()).unwrap(), reparsed);
    }

    #[test]
    fn test_text_shadow_rejects_inset() {
        assert!(TextShadow::parse("inset 1px 1px").is_err());
    }
}
