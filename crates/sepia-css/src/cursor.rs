//! Sequential, non-backtracking cursor over one call's argument nodes.
//!
//! [CSS Color 4 § 4.1](https://www.w3.org/TR/css-color-4/#rgb-functions):
//! "For legacy reasons, rgb() also supports an alternate syntax that
//! separates all of its arguments with commas."
//!
//! Whether a call is legacy (comma-separated, fixed arity) or modern
//! (space-separated, optional `/ alpha`) is decided once per call, by
//! checking for a top-level comma; CSS never mixes the two within one
//! function. On any failure the caller aborts — the cursor position is
//! unspecified afterwards and no resynchronization is attempted.

use crate::error::{ValueError, ValueResult};
use crate::node::Node;
use crate::values::length::{self, LengthPercentage};

/// The argument syntax a function call was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallSyntax {
    /// Comma-separated, fixed arity (`rgb(255, 0, 0, 0.5)`). Accepted only
    /// by the rgb and hsl families.
    Legacy,
    /// Space-separated with an optional `/ alpha` suffix
    /// (`rgb(255 0 0 / 0.5)`).
    Modern,
}

/// A forward-only pointer over one function call's argument nodes.
pub struct ArgCursor<'a> {
    nodes: &'a [Node],
    position: usize,
    syntax: CallSyntax,
}

impl<'a> ArgCursor<'a> {
    /// Create a cursor, deciding legacy vs. modern syntax once up front.
    #[must_use]
    pub fn new(nodes: &'a [Node]) -> Self {
        let syntax = if nodes.iter().any(Node::is_comma) {
            CallSyntax::Legacy
        } else {
            CallSyntax::Modern
        };
        Self {
            nodes,
            position: 0,
            syntax,
        }
    }

    /// The syntax decision made for this call.
    #[must_use]
    pub const fn syntax(&self) -> CallSyntax {
        self.syntax
    }

    /// Whether this call uses the legacy comma syntax.
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        matches!(self.syntax, CallSyntax::Legacy)
    }

    /// Look at the next node without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&'a Node> {
        self.nodes.get(self.position)
    }

    /// Consume and return the next node.
    pub fn take(&mut self) -> Option<&'a Node> {
        let node = self.nodes.get(self.position);
        if node.is_some() {
            self.position += 1;
        }
        node
    }

    /// The not-yet-consumed remainder.
    #[must_use]
    pub fn remaining(&self) -> &'a [Node] {
        &self.nodes[self.position.min(self.nodes.len())..]
    }

    /// Whether every node has been consumed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.position >= self.nodes.len()
    }

    /// If the next node is an identifier matching one of `candidates`
    /// (ASCII case-insensitive), consume it and return the candidate's
    /// canonical spelling.
    pub fn take_keyword(&mut self, candidates: &[&'static str]) -> Option<&'static str> {
        if let Some(Node::Ident(name)) = self.peek() {
            for candidate in candidates {
                if candidate.eq_ignore_ascii_case(name) {
                    let _ = self.take();
                    return Some(candidate);
                }
            }
        }
        None
    }

    /// Consume the next node as a bare number.
    ///
    /// # Errors
    ///
    /// Returns a syntax issue if the next node is missing or not a number.
    pub fn take_number(&mut self) -> ValueResult<f64> {
        match self.take() {
            Some(Node::Number(value)) => Ok(*value),
            Some(other) => Err(ValueError::syntax("a number", other.describe()).into()),
            None => Err(ValueError::syntax("a number", "end of arguments").into()),
        }
    }

    /// Consume the next node as a `<length-percentage>`.
    ///
    /// # Errors
    ///
    /// Returns a syntax issue if the next node is missing or not a length
    /// or percentage.
    pub fn take_length_or_percentage(&mut self) -> ValueResult<LengthPercentage> {
        match self.take() {
            Some(node) => length::parse_length_percentage(node),
            None => Err(ValueError::syntax("a length or percentage", "end of arguments").into()),
        }
    }

    /// Consume the alpha separator if one is next: `/` in modern syntax,
    /// `,` in legacy syntax. Returns whether a separator was consumed.
    pub fn skip_if_slash_or_comma(&mut self) -> bool {
        let expected = match self.syntax {
            CallSyntax::Legacy => ',',
            CallSyntax::Modern => '/',
        };
        if self.peek() == Some(&Node::Operator(expected)) {
            let _ = self.take();
            return true;
        }
        false
    }

    /// Consume the legacy comma between fixed-arity channels.
    ///
    /// # Errors
    ///
    /// Returns a syntax issue if the comma is missing.
    pub fn expect_comma(&mut self) -> ValueResult<()> {
        match self.take() {
            Some(Node::Operator(',')) => Ok(()),
            Some(other) => Err(ValueError::syntax("a comma", other.describe()).into()),
            None => Err(ValueError::syntax("a comma", "end of arguments").into()),
        }
    }

    /// Require that every argument has been consumed.
    ///
    /// # Errors
    ///
    /// Returns an arity issue naming the first leftover node.
    pub fn expect_done(&mut self, slot: &'static str) -> ValueResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(node) => {
                let mut issues = crate::error::Issues::from(ValueError::Arity {
                    slot,
                    expected: "no further arguments",
                    found: self.nodes.len() - self.position,
                });
                issues.push(ValueError::syntax("end of arguments", node.describe()));
                Err(issues)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::parse_node_list;

    #[test]
    fn test_syntax_detection() {
        let legacy = parse_node_list("255, 0, 0").unwrap();
        assert_eq!(ArgCursor::new(&legacy).syntax(), CallSyntax::Legacy);

        let modern = parse_node_list("255 0 0 / 0.5").unwrap();
        assert_eq!(ArgCursor::new(&modern).syntax(), CallSyntax::Modern);
    }

    #[test]
    fn test_take_keyword_is_case_insensitive() {
        let nodes = parse_node_list("Circle").unwrap();
        let mut cursor = ArgCursor::new(&nodes);
        assert_eq!(cursor.take_keyword(&["circle", "ellipse"]), Some("circle"));
        assert!(cursor.is_done());
    }

    #[test]
    fn test_slash_skip_respects_mode() {
        let nodes = parse_node_list("0.5 / 1").unwrap();
        let mut cursor = ArgCursor::new(&nodes);
        let _ = cursor.take_number().unwrap();
        assert!(cursor.skip_if_slash_or_comma());
    }
}
