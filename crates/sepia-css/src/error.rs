//! Structured parse and generation errors.
//!
//! Errors are values, never panics: every parser either returns a fully
//! valid IR or an [`Issues`] list, with no partially populated results.

use std::fmt;

use strum_macros::Display;
use thiserror::Error;

/// Broad category of a [`ValueError`], useful for asserting on failure
/// modes without matching full messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    /// Unknown or mismatched function name, empty stop/layer group,
    /// missing minimum stop count.
    Structural,
    /// Too few or too many positional values for a slot.
    Arity,
    /// A value outside a model's legal interval that is rejected rather
    /// than clamped (alpha, and nothing else).
    Range,
    /// A node of the wrong kind in a given slot.
    Syntax,
}

/// A single structured parse or generation issue.
///
/// Most channel values outside their legal interval are clamped silently
/// ([CSS Color 4 § 4.1](https://www.w3.org/TR/css-color-4/#rgb-functions):
/// "Values outside these ranges are not invalid, but are clamped to the
/// ranges defined here at parsed-value time"); only alpha and the minimum
/// stop count are rejected outright.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// Unknown function name, empty comma group, or a stop list with
    /// fewer than two entries.
    #[error("{message}")]
    Structural {
        /// Human-readable description of the structural problem.
        message: String,
    },

    /// A slot received the wrong number of positional values.
    #[error("expected {expected} for {slot}, found {found}")]
    Arity {
        /// The grammar slot being filled (e.g. "shadow lengths").
        slot: &'static str,
        /// What the grammar allows (e.g. "2 to 4 values").
        expected: &'static str,
        /// How many values were actually present.
        found: usize,
    },

    /// A value outside its legal interval in a position where the grammar
    /// rejects rather than clamps.
    #[error("{slot} value {value} is outside [{min}, {max}]")]
    Range {
        /// The value slot (e.g. "alpha").
        slot: &'static str,
        /// The offending value.
        value: f64,
        /// Lower bound of the legal interval.
        min: f64,
        /// Upper bound of the legal interval.
        max: f64,
    },

    /// A node of the wrong kind appeared in a slot.
    #[error("expected {expected}, found {found}")]
    Syntax {
        /// What the grammar expected at this point.
        expected: &'static str,
        /// A short description of what was found instead.
        found: String,
    },
}

impl ValueError {
    /// Create a structural error from a message.
    pub fn structural(message: impl Into<String>) -> Self {
        Self::Structural {
            message: message.into(),
        }
    }

    /// Create a syntax error from an expectation and what was found.
    pub fn syntax(expected: &'static str, found: impl Into<String>) -> Self {
        Self::Syntax {
            expected,
            found: found.into(),
        }
    }

    /// The broad category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Structural { .. } => ErrorKind::Structural,
            Self::Arity { .. } => ErrorKind::Arity,
            Self::Range { .. } => ErrorKind::Range,
            Self::Syntax { .. } => ErrorKind::Syntax,
        }
    }
}

/// A non-empty list of [`ValueError`]s.
///
/// Parsers abort on the first error, so most lists hold exactly one issue;
/// the list shape exists so higher layers can aggregate without losing
/// structure.
#[derive(Debug, Clone, PartialEq)]
pub struct Issues {
    issues: Vec<ValueError>,
}

impl Issues {
    /// Create an issue list from its first (and usually only) issue.
    #[must_use]
    pub fn new(issue: ValueError) -> Self {
        Self {
            issues: vec![issue],
        }
    }

    /// Append a further issue.
    pub fn push(&mut self, issue: ValueError) {
        self.issues.push(issue);
    }

    /// The first recorded issue.
    ///
    /// The list is non-empty by construction, so this never fails.
    #[must_use]
    #[allow(clippy::missing_panics_doc)]
    pub fn primary(&self) -> &ValueError {
        &self.issues[0]
    }

    /// Iterate over all recorded issues.
    pub fn iter(&self) -> impl Iterator<Item = &ValueError> {
        self.issues.iter()
    }

    /// Number of recorded issues (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Always false; present to satisfy the `len`/`is_empty` convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

impl<'a> IntoIterator for &'a Issues {
    type Item = &'a ValueError;
    type IntoIter = std::slice::Iter<'a, ValueError>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}

impl From<ValueError> for Issues {
    fn from(issue: ValueError) -> Self {
        Self::new(issue)
    }
}

impl fmt::Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Issues {}

/// Result alias used by every parser and generator in this crate.
pub type ValueResult<T> = Result<T, Issues>;
