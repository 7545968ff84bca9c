//! The flat node layer the value parsers consume.
//!
//! [§ 5.4.7 Consume a component value](https://www.w3.org/TR/css-syntax-3/#consume-component-value)
//!
//! Tokens are folded into [`Node`]s: whitespace disappears, function
//! arguments nest under their [`Node::Function`], and the separator
//! characters `,` and `/` become [`Node::Operator`]s. Every grammar in this
//! crate parses against this shape only, never against a tokenizer directly,
//! so a different token source can be substituted behind
//! [`parse_node_list`].

use crate::error::{ValueError, ValueResult};
use crate::tokenizer::{Token, Tokenizer};

/// One node of a parsed value.
///
/// This is the engine's entire input contract: a flat list of typed nodes
/// for one value, with one level of nesting per function call.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An identifier (`red`, `inset`, `to`, `circle`, ...).
    Ident(String),
    /// A unitless number.
    Number(f64),
    /// A percentage; the value is the number before the `%` sign.
    Percentage(f64),
    /// A number with a unit (`10px`, `45deg`, `0.25turn`, ...).
    Dimension {
        /// The numeric value.
        value: f64,
        /// The unit identifier, as written.
        unit: String,
    },
    /// A separator operator: `,` or `/`.
    Operator(char),
    /// A function call with its already-folded argument nodes.
    Function {
        /// The function name, as written (matched case-insensitively).
        name: String,
        /// The argument nodes between the parentheses.
        args: Vec<Node>,
    },
    /// A hash value (`#ff0000` carries `ff0000`).
    Hash(String),
}

impl Node {
    /// A short noun for this node's kind, used in error messages.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Ident(_) => "identifier",
            Self::Number(_) => "number",
            Self::Percentage(_) => "percentage",
            Self::Dimension { .. } => "dimension",
            Self::Operator(_) => "operator",
            Self::Function { .. } => "function",
            Self::Hash(_) => "hash",
        }
    }

    /// A short rendering of this node for error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Ident(v) => format!("identifier `{v}`"),
            Self::Number(v) => format!("number `{v}`"),
            Self::Percentage(v) => format!("percentage `{v}%`"),
            Self::Dimension { value, unit } => format!("dimension `{value}{unit}`"),
            Self::Operator(c) => format!("operator `{c}`"),
            Self::Function { name, .. } => format!("function `{name}()`"),
            Self::Hash(v) => format!("hash `#{v}`"),
        }
    }

    /// Returns true if this node is the comma operator.
    #[must_use]
    pub fn is_comma(&self) -> bool {
        matches!(self, Self::Operator(','))
    }
}

/// Tokenize one value string and fold it into a node list.
///
/// # Errors
///
/// Returns a syntax issue for characters outside the value token set,
/// for an unclosed function call, and for a stray closing parenthesis.
pub fn parse_node_list(text: &str) -> ValueResult<Vec<Node>> {
    let mut tokenizer = Tokenizer::new(text);
    tokenizer.run();
    let tokens = tokenizer.into_tokens();

    let mut position = 0;
    let nodes = fold_nodes(&tokens, &mut position, false)?;
    Ok(nodes)
}

/// Fold tokens into nodes until EOF (top level) or a closing parenthesis
/// (inside a function).
fn fold_nodes(tokens: &[Token], position: &mut usize, in_function: bool) -> ValueResult<Vec<Node>> {
    let mut nodes = Vec::new();

    loop {
        let token = tokens.get(*position).cloned().unwrap_or(Token::Eof);
        *position += 1;

        match token {
            Token::Eof => {
                if in_function {
                    return Err(ValueError::syntax("closing parenthesis", "end of input").into());
                }
                return Ok(nodes);
            }
            Token::RightParen => {
                if in_function {
                    return Ok(nodes);
                }
                return Err(ValueError::syntax("a value", "stray `)`").into());
            }
            Token::Whitespace => {}
            Token::Ident(v) => nodes.push(Node::Ident(v)),
            Token::Number(v) => nodes.push(Node::Number(v)),
            Token::Percentage(v) => nodes.push(Node::Percentage(v)),
            Token::Dimension { value, unit } => nodes.push(Node::Dimension { value, unit }),
            Token::Hash(v) => nodes.push(Node::Hash(v)),
            Token::Comma => nodes.push(Node::Operator(',')),
            Token::Delim('/') => nodes.push(Node::Operator('/')),
            Token::Function(name) => {
                let args = fold_nodes(tokens, position, true)?;
                nodes.push(Node::Function { name, args });
            }
            Token::LeftParen => {
                return Err(ValueError::syntax("a value", "stray `(`").into());
            }
            Token::Delim(c) => {
                return Err(ValueError::syntax("a value", format!("character `{c}`")).into());
            }
        }
    }
}

/// Partition a node slice on its commas into per-item groups.
///
/// The nodes are already folded, so every [`Node::Operator`] comma in the
/// slice is a top-level one. An empty group (leading or internal stray
/// comma) is a structural error; a single trailing comma is tolerated and
/// simply yields one fewer group.
///
/// # Errors
///
/// Returns a structural issue for an empty group.
pub(crate) fn split_comma_groups(nodes: &[Node]) -> ValueResult<Vec<&[Node]>> {
    let mut groups = Vec::new();
    let mut start = 0;

    for (i, node) in nodes.iter().enumerate() {
        if node.is_comma() {
            if i == start {
                return Err(
                    ValueError::structural("empty group in comma-separated list").into(),
                );
            }
            groups.push(&nodes[start..i]);
            start = i + 1;
        }
    }

    if start < nodes.len() {
        groups.push(&nodes[start..]);
    }
    // start == nodes.len() here means the list ended with a comma; a single
    // trailing comma is tolerated.

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_function_folding() {
        let nodes = parse_node_list("rgb(255 0 0)").unwrap();
        assert_eq!(nodes.len(), 1);
        match &nodes[0] {
            Node::Function { name, args } => {
                assert_eq!(name, "rgb");
                assert_eq!(args.len(), 3);
            }
            other => panic!("Expected function node, got {}", other.describe()),
        }
    }

    #[test]
    fn test_whitespace_dropped_operators_kept() {
        let nodes = parse_node_list("0 0 10px / 2px").unwrap();
        assert_eq!(nodes.len(), 5);
        assert_eq!(nodes[3], Node::Operator('/'));
    }

    #[test]
    fn test_unclosed_function() {
        assert!(parse_node_list("rgb(255 0 0").is_err());
    }

    #[test]
    fn test_split_groups_tolerates_trailing_comma() {
        let nodes = parse_node_list("red, blue,").unwrap();
        let groups = split_comma_groups(&nodes).unwrap();
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_split_groups_rejects_empty_group() {
        let nodes = parse_node_list("red, , blue").unwrap();
        assert!(split_comma_groups(&nodes).is_err());
    }
}
