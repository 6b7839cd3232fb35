//! Diagnostics for unbalanced input.
//!
//! The checker never fails: an unbalanced string is an ordinary result.
//! [`Imbalance`] describes *why* a string is unbalanced and implements
//! `std::error::Error` so callers can propagate it with `?` when they choose
//! to treat imbalance as a failure.

use serde::Serialize;
use thiserror::Error;

/// First problem found while scanning a string.
///
/// All indices are zero-based offsets counted in `char`s, not bytes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Imbalance {
    #[error("unexpected '{found}' at position {index}: nothing is open")]
    UnexpectedCloser { index: usize, found: char },

    #[error("mismatched '{found}' at position {index}: expected '{expected}'")]
    Mismatched {
        index: usize,
        expected: char,
        found: char,
    },

    #[error("'{opener}' at position {index} is never closed")]
    Unclosed { index: usize, opener: char },
}

impl Imbalance {
    /// Position of the offending character.
    pub fn index(&self) -> usize {
        match *self {
            Self::UnexpectedCloser { index, .. }
            | Self::Mismatched { index, .. }
            | Self::Unclosed { index, .. } => index,
        }
    }

    /// Get user-actionable suggestions for fixing the input.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnexpectedCloser { index, found } => vec![
                format!("Remove the '{found}' at position {index}"),
                "Or add the matching opener before it".into(),
            ],
            Self::Mismatched {
                index,
                expected,
                found,
            } => vec![format!(
                "Replace '{found}' at position {index} with '{expected}'"
            )],
            Self::Unclosed { index, opener } => vec![format!(
                "Close the '{opener}' opened at position {index}"
            )],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_position() {
        let err = Imbalance::Mismatched {
            index: 2,
            expected: ']',
            found: ')',
        };
        assert_eq!(
            err.to_string(),
            "mismatched ')' at position 2: expected ']'"
        );
        assert_eq!(err.index(), 2);
    }

    #[test]
    fn suggestions_non_empty() {
        let all = [
            Imbalance::UnexpectedCloser {
                index: 0,
                found: ')',
            },
            Imbalance::Mismatched {
                index: 1,
                expected: '}',
                found: ']',
            },
            Imbalance::Unclosed {
                index: 0,
                opener: '(',
            },
        ];
        for err in all {
            assert!(!err.suggestions().is_empty(), "{err:?}");
        }
    }

    #[test]
    fn serialises_with_kind_tag() {
        let json = serde_json::to_value(Imbalance::Unclosed {
            index: 3,
            opener: '[',
        })
        .unwrap();
        assert_eq!(json["kind"], "unclosed");
        assert_eq!(json["index"], 3);
        assert_eq!(json["opener"], "[");
    }
}
