//! Balanced-bracket checker.
//!
//! One left-to-right pass over the input. Openers push their pair onto a
//! [`Stack`]; closers must match the pair on top. Every other character is
//! skipped. The input is balanced iff nothing fails during the scan and the
//! stack is empty at the end.

use tracing::{debug, trace};

use crate::{
    domain::{Bracket, Stack, Verdict},
    error::Imbalance,
};

/// Scan `input` and report the first imbalance, if any.
///
/// Runs in O(n) time and at most O(n) extra space.
///
/// ```
/// use braces_core::{check, error::Imbalance};
///
/// assert_eq!(check("{[]()}"), Ok(()));
/// assert_eq!(
///     check("([)]"),
///     Err(Imbalance::Mismatched { index: 2, expected: ']', found: ')' })
/// );
/// ```
pub fn check(input: &str) -> Result<(), Imbalance> {
    // Holds exactly the still-unmatched openers, most recent on top.
    let mut open: Stack<(Bracket, usize)> = Stack::new();

    for (index, c) in input.chars().enumerate() {
        if let Some(bracket) = Bracket::from_opener(c) {
            open.push((bracket, index));
        } else if Bracket::from_closer(c).is_some() {
            let Some((expected, _)) = open.pop() else {
                return Err(reject(Imbalance::UnexpectedCloser { index, found: c }));
            };
            if expected.closer() != c {
                return Err(reject(Imbalance::Mismatched {
                    index,
                    expected: expected.closer(),
                    found: c,
                }));
            }
        }
    }

    match open.pop() {
        None => Ok(()),
        Some((bracket, index)) => Err(reject(Imbalance::Unclosed {
            index,
            opener: bracket.opener(),
        })),
    }
}

fn reject(imbalance: Imbalance) -> Imbalance {
    trace!(%imbalance, "input rejected");
    imbalance
}

/// `true` if every opener in `input` has a matching, correctly nested closer.
///
/// Total over all strings; the empty string and strings without brackets
/// are balanced.
pub fn is_balanced(input: &str) -> bool {
    check(input).is_ok()
}

/// [`is_balanced`] as a [`Verdict`].
pub fn verdict(input: &str) -> Verdict {
    Verdict::from(is_balanced(input))
}

/// Verdict for each input, in input order.
pub fn verdicts<I, S>(inputs: I) -> Vec<Verdict>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let results: Vec<Verdict> = inputs
        .into_iter()
        .map(|input| verdict(input.as_ref()))
        .collect();

    debug!(
        count = results.len(),
        balanced = results.iter().filter(|v| v.is_yes()).count(),
        "batch classified"
    );
    results
}

/// `"YES"`/`"NO"` for each input, in input order.
///
/// ```
/// use braces_core::classify_all;
///
/// assert_eq!(classify_all(["{[]()}", "([)]", ""]), ["YES", "NO", "YES"]);
/// ```
pub fn classify_all<I, S>(inputs: I) -> Vec<&'static str>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    verdicts(inputs).into_iter().map(Verdict::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_scenarios() {
        assert!(is_balanced("{[]()}"));
        assert!(!is_balanced("([)]"));
        assert!(is_balanced("()[]{}"));
        assert!(!is_balanced("("));
        assert!(!is_balanced(")"));
    }

    #[test]
    fn empty_is_balanced() {
        assert!(is_balanced(""));
        assert_eq!(check(""), Ok(()));
    }

    #[test]
    fn non_bracket_text_is_ignored() {
        assert!(is_balanced("hello world"));
        assert!(is_balanced("<>"));
        assert!(is_balanced("fn main() { let v = [1, 2]; }"));
        assert!(!is_balanced("if (x > 0 { y }"));
    }

    #[test]
    fn mismatched_types_never_match() {
        assert!(!is_balanced("(]"));
        assert!(!is_balanced("{(})"));
        assert!(!is_balanced("[}"));
    }

    #[test]
    fn unexpected_closer_reports_position() {
        assert_eq!(
            check(")"),
            Err(Imbalance::UnexpectedCloser {
                index: 0,
                found: ')'
            })
        );
        assert_eq!(
            check("()]"),
            Err(Imbalance::UnexpectedCloser {
                index: 2,
                found: ']'
            })
        );
    }

    #[test]
    fn mismatch_reports_expected_closer() {
        assert_eq!(
            check("([)]"),
            Err(Imbalance::Mismatched {
                index: 2,
                expected: ']',
                found: ')'
            })
        );
    }

    #[test]
    fn unclosed_reports_innermost_opener() {
        assert_eq!(
            check("a(b["),
            Err(Imbalance::Unclosed {
                index: 3,
                opener: '['
            })
        );
    }

    #[test]
    fn indices_count_chars_not_bytes() {
        assert_eq!(
            check("é)"),
            Err(Imbalance::UnexpectedCloser {
                index: 1,
                found: ')'
            })
        );
    }

    #[test]
    fn classify_all_preserves_order() {
        assert_eq!(classify_all(["{[]()}", "([)]", ""]), ["YES", "NO", "YES"]);
        assert!(classify_all(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn verdicts_accepts_owned_strings() {
        let inputs = vec![String::from("("), String::from("()")];
        assert_eq!(verdicts(&inputs), [Verdict::No, Verdict::Yes]);
    }
}
