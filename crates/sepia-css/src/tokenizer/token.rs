//! Token types per [§ 4 Tokenization](https://www.w3.org/TR/css-syntax-3/#tokenization).
//!
//! Only the token types that occur inside property values are represented.
//! At-keywords, strings, urls, blocks, and escape sequences never appear in
//! the gradient/shadow/color grammars this crate covers, so they are not
//! modeled; the tokenizer falls back to [`Token::Delim`] for such input and
//! the node builder reports it.

use core::fmt;

/// A single CSS value token.
///
/// [§ 4.2 Definitions](https://www.w3.org/TR/css-syntax-3/#token-diagrams)
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// "`<ident-token>` has a value composed of one or more code points."
    Ident(String),

    /// "`<function-token>` has a value composed of one or more code points,
    /// followed by U+0028 LEFT PARENTHESIS."
    ///
    /// The opening parenthesis is consumed with the name.
    Function(String),

    /// "`<hash-token>` has a value composed of one or more code points,
    /// preceded by U+0023 NUMBER SIGN (#)."
    Hash(String),

    /// "`<number-token>` has a numeric value."
    Number(f64),

    /// "`<percentage-token>` has a numeric value."
    ///
    /// The value is the number before the `%` sign (so `50%` carries 50.0).
    Percentage(f64),

    /// "`<dimension-token>` has a numeric value ... and a unit."
    Dimension {
        /// The numeric value.
        value: f64,
        /// The unit identifier, as written (case preserved).
        unit: String,
    },

    /// "`<delim-token>` has a value composed of a single code point."
    Delim(char),

    /// "`<comma-token>` represents U+002C COMMA (,)."
    Comma,

    /// "`<(-token>` represents U+0028 LEFT PARENTHESIS."
    LeftParen,

    /// "`<)-token>` represents U+0029 RIGHT PARENTHESIS."
    RightParen,

    /// "`<whitespace-token>` represents one or more whitespace code points."
    Whitespace,

    /// End of input.
    Eof,
}

impl Token {
    /// Returns true if this is the end-of-input token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Eof)
    }

    /// Returns true if this is a whitespace token.
    #[must_use]
    pub const fn is_whitespace(&self) -> bool {
        matches!(self, Self::Whitespace)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(v) => write!(f, "<ident:{v}>"),
            Self::Function(v) => write!(f, "<function:{v}(>"),
            Self::Hash(v) => write!(f, "<hash:#{v}>"),
            Self::Number(v) => write!(f, "<number:{v}>"),
            Self::Percentage(v) => write!(f, "<percentage:{v}%>"),
            Self::Dimension { value, unit } => write!(f, "<dimension:{value}{unit}>"),
            Self::Delim(c) => write!(f, "<delim:{c}>"),
            Self::Comma => write!(f, "<comma>"),
            Self::LeftParen => write!(f, "<(>"),
            Self::RightParen => write!(f, "<)>"),
            Self::Whitespace => write!(f, "<whitespace>"),
            Self::Eof => write!(f, "<EOF>"),
        }
    }
}
