//! `braces batch`: one input per line from a file or stdin.
//!
//! Every line, including an empty one, is an input.  Line terminators
//! (`\n` or `\r\n`) are not part of the input.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    cli::BatchArgs,
    commands::report::{self, CheckRecord, ReportOptions},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

#[instrument(skip_all)]
pub fn execute(args: BatchArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let opts = ReportOptions {
        explain: args.explain || config.check.explain,
        strict: args.strict || config.check.strict,
    };

    let lines = match args.file.as_deref() {
        None => read_inputs(io::stdin().lock())?,
        Some(path) if path == Path::new("-") => read_inputs(io::stdin().lock())?,
        Some(path) => read_inputs(open(path)?)?,
    };
    debug!(lines = lines.len(), "batch input read");

    let records: Vec<CheckRecord> = lines.into_iter().map(CheckRecord::evaluate).collect();
    report::emit(&records, opts, &output)
}

fn open(path: &Path) -> CliResult<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(CliError::InputNotFound {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(e).with_cli_context(|| format!("Failed to open '{}'", path.display())),
    }
}

/// Collect every line of `reader`, in order.
fn read_inputs<R: BufRead>(reader: R) -> CliResult<Vec<String>> {
    reader
        .lines()
        .enumerate()
        .map(|(n, line)| match line {
            Err(e) if e.kind() == io::ErrorKind::InvalidData => Err(CliError::InvalidInput {
                message: format!("line {} is not valid UTF-8", n + 1),
                source: Some(Box::new(e)),
            }),
            other => other.with_cli_context(|| format!("Failed to read line {}", n + 1)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn keeps_empty_lines_and_order() {
        let lines = read_inputs(Cursor::new("{[]()}\n([)]\n\n")).unwrap();
        assert_eq!(lines, ["{[]()}", "([)]", ""]);
    }

    #[test]
    fn strips_crlf() {
        let lines = read_inputs(Cursor::new("()\r\n(]\r\n")).unwrap();
        assert_eq!(lines, ["()", "(]"]);
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        let lines = read_inputs(Cursor::new("()\n[")).unwrap();
        assert_eq!(lines, ["()", "["]);
    }

    #[test]
    fn invalid_utf8_is_user_error() {
        let err = read_inputs(Cursor::new(b"()\n\xff\xfe\n".to_vec())).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = open(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, CliError::InputNotFound { .. }));
    }
}
