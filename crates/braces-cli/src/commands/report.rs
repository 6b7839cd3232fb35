//! Shared result rendering for `check` and `batch`.

use serde::Serialize;
use tracing::{debug, info};

use braces_core::{domain::Verdict, error::Imbalance};

use crate::{
    cli::OutputFormat,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// One checked input, as printed (or serialised) by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckRecord {
    pub input: String,
    pub verdict: Verdict,
    pub reason: Option<Imbalance>,
}

impl CheckRecord {
    pub fn evaluate(input: String) -> Self {
        let reason = braces_core::check(&input).err();
        if let Some(imbalance) = &reason {
            debug!(position = imbalance.index(), %imbalance, "unbalanced input");
        }
        Self {
            verdict: Verdict::from(reason.is_none()),
            input,
            reason,
        }
    }
}

/// How `check` and `batch` should report, after merging flags with config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    pub explain: bool,
    pub strict: bool,
}

/// Print every record in input order, then enforce `strict`.
pub fn emit(records: &[CheckRecord], opts: ReportOptions, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(&records)?;
    } else {
        for record in records {
            let reason = record.reason.as_ref().filter(|_| opts.explain);
            output.verdict(&record.input, record.verdict, reason)?;
        }
    }

    let total = records.len();
    let unbalanced = count_unbalanced(records);
    info!(total, unbalanced, "inputs checked");

    if output.format() == OutputFormat::Human && total > 1 {
        output.info(&format!("{} of {total} balanced", total - unbalanced))?;
    }

    if opts.strict && unbalanced > 0 {
        return Err(CliError::Unbalanced { unbalanced, total });
    }
    Ok(())
}

fn count_unbalanced(records: &[CheckRecord]) -> usize {
    records.iter().filter(|r| !r.verdict.is_yes()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_keeps_reason() {
        let record = CheckRecord::evaluate("([)]".into());
        assert_eq!(record.verdict, Verdict::No);
        assert_eq!(
            record.reason,
            Some(Imbalance::Mismatched {
                index: 2,
                expected: ']',
                found: ')'
            })
        );

        let ok = CheckRecord::evaluate("{[]()}".into());
        assert_eq!(ok.verdict, Verdict::Yes);
        assert_eq!(ok.reason, None);
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(CheckRecord::evaluate("(".into())).unwrap();
        assert_eq!(json["input"], "(");
        assert_eq!(json["verdict"], "NO");
        assert_eq!(json["reason"]["kind"], "unclosed");

        let json = serde_json::to_value(CheckRecord::evaluate("()".into())).unwrap();
        assert!(json["reason"].is_null());
    }

    #[test]
    fn counts_unbalanced() {
        let records: Vec<_> = ["()", "(", ")", ""]
            .into_iter()
            .map(|s| CheckRecord::evaluate(s.into()))
            .collect();
        assert_eq!(count_unbalanced(&records), 2);
    }
}
