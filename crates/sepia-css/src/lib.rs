//! CSS value parsing and generation for gradients, shadows, and color
//! functions.
//!
//! # Scope
//!
//! This crate implements:
//! - **Value Tokenizer** ([§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization))
//!   - The token types CSS values need: ident, function, hash, number,
//!     percentage, dimension, delimiters
//!   - Comment handling
//!
//! - **Color Functions** ([CSS Color Level 4](https://www.w3.org/TR/css-color-4/))
//!   - rgb()/rgba(), hsl()/hsla(), hwb(), lab(), lch(), oklab(), oklch(), color()
//!   - Hex, named, system, and special color keywords
//!   - Legacy comma syntax normalized to modern space syntax
//!   - Channel clamping, hue wrapping, alpha range rejection
//!
//! - **Gradients** ([CSS Images Level 3](https://www.w3.org/TR/css-images-3/#gradients))
//!   - linear-gradient(), radial-gradient(), conic-gradient() and their
//!     repeating- forms
//!   - Direction, shape, size, position, and interpolation-space clauses
//!   - Color stop lists with per-gradient position typing
//!
//! - **Shadows** ([CSS Backgrounds Level 3 § 7.2](https://www.w3.org/TR/css-backgrounds-3/#box-shadow))
//!   - box-shadow and text-shadow layer lists
//!   - Order-free layer components classified in one scan
//!
//! Every parser returns a typed IR or a structured [`error::Issues`] list,
//! and every IR serializes back to one canonical text form via `to_css()`.
//!
//! # Not Implemented
//!
//! - Cascade, selectors, and layout
//! - Color space conversion beyond parse-time clamping
//! - `<string>`, `url()`, and the tokens only stylesheets need

/// Static keyword and unit catalogs consulted by the grammars.
pub mod catalog;
/// Color values per [CSS Color Level 4](https://www.w3.org/TR/css-color-4/).
pub mod color;
/// The argument cursor shared by all function parsers.
pub mod cursor;
/// Structured parse and generation errors.
pub mod error;
/// Gradient values per [CSS Images Level 3 § 3](https://www.w3.org/TR/css-images-3/#gradients).
pub mod gradient;
/// The folded node layer the value parsers consume.
pub mod node;
/// Shadow values per [CSS Backgrounds Level 3 § 7.2](https://www.w3.org/TR/css-backgrounds-3/#box-shadow).
pub mod shadow;
/// CSS value tokenizer per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
pub mod tokenizer;
/// Reusable component parsers: angle, length, position, size.
pub mod values;

// Re-exports for convenience
pub use color::{Color, SpecialColor};
pub use cursor::{ArgCursor, CallSyntax};
pub use error::{ErrorKind, Issues, ValueError, ValueResult};
pub use gradient::{ColorStop, ConicGradient, Gradient, LinearGradient, RadialGradient, StopPosition};
pub use node::{Node, parse_node_list};
pub use shadow::{BoxShadow, BoxShadowLayer, TextShadow, TextShadowLayer};
pub use tokenizer::{Token, Tokenizer};
pub use values::{Angle, Length, LengthPercentage, Position, RadialSize};
