//! CLI error type and its mapping to stderr text and exit codes.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Batch input file does not exist.
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    /// `--strict` was given and at least one input is unbalanced.
    #[error("{unbalanced} of {total} input(s) unbalanced")]
    Unbalanced { unbalanced: usize, total: usize },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Hints shown under the error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec![
                "Batch input must be UTF-8 text".into(),
                "Re-encode the file (e.g. `iconv -t UTF-8`) and try again".into(),
            ],

            Self::InputNotFound { path } => vec![
                format!("No file at '{}'", path.display()),
                "Pass '-' or omit FILE to read from stdin".into(),
            ],

            Self::Unbalanced { .. } => vec![
                "Re-run with --explain to see why each input failed".into(),
                "Drop --strict (or set check.strict = false) to only report verdicts".into(),
            ],

            Self::ConfigError { .. } => vec![
                "Show the config file location: braces config path".into(),
                "Use 'braces init --force' to write a default config".into(),
            ],

            Self::IoError { .. } => vec![
                "For batch, check that FILE is readable or pipe it through stdin".into(),
                "For init, use -c FILE to write the config somewhere writable".into(),
            ],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::InputNotFound { .. } => ErrorCategory::NotFound,
            Self::Unbalanced { .. } => ErrorCategory::Unbalanced,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | Internal      |  1   |
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Unbalanced    |  5   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Internal => 1,
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Unbalanced => 5,
        }
    }

    /// Render the message, the cause chain (only when `verbose`) and the
    /// hints as stderr text.  `color` adds ANSI styling.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let mut lines = vec![paint(color, &format!("error: {self}"), |t| {
            t.red().bold().to_string()
        })];

        let mut source = self.source();
        if verbose {
            while let Some(err) = source {
                lines.push(format!(
                    "  caused by: {}",
                    paint(color, &err.to_string(), |t| t.dimmed().to_string())
                ));
                source = err.source();
            }
        }

        for hint in self.suggestions() {
            lines.push(format!(
                "  {} {hint}",
                paint(color, "hint:", |t| t.yellow().bold().to_string())
            ));
        }

        if source.is_some() {
            lines.push(paint(color, "  (run with -v to see the cause)", |t| {
                t.dimmed().to_string()
            }));
        }

        lines.join("\n") + "\n"
    }

    /// Record the error on the tracing subscriber.
    pub fn log(&self) {
        let code = self.exit_code();
        match self.category() {
            ErrorCategory::Unbalanced => tracing::info!(code, "{self}"),
            ErrorCategory::UserError | ErrorCategory::NotFound => tracing::warn!(code, "{self}"),
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(code, "{self}")
            }
        }

        if let Some(source) = self.source() {
            tracing::debug!(%source, "caused by");
        }
    }
}

fn paint(color: bool, text: &str, style: impl Fn(&str) -> String) -> String {
    if color { style(text) } else { text.to_owned() }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Input checked fine but was rejected by `--strict`.
    Unbalanced,
    /// Internal/system error.
    Internal,
}

// ── IntoCli trait ─────────────────────────────────────────────────────────────

/// Extension trait to convert foreign error types into [`CliError`] at
/// call-sites with a descriptive context message.
pub trait IntoCli<T> {
    /// Convert to `CliResult` attaching a human-readable context message.
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, f: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::IoError {
            message: f().into(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn unbalanced_suggests_explain() {
        let err = CliError::Unbalanced {
            unbalanced: 1,
            total: 3,
        };
        assert!(err.suggestions().iter().any(|s| s.contains("--explain")));
        assert_eq!(err.to_string(), "1 of 3 input(s) unbalanced");
    }

    #[test]
    fn input_not_found_mentions_stdin() {
        let err = CliError::InputNotFound {
            path: PathBuf::from("/tmp/missing.txt"),
        };
        assert!(err.suggestions().iter().any(|s| s.contains("stdin")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        assert_eq!(
            CliError::InvalidInput {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            2
        );
    }

    #[test]
    fn exit_code_not_found() {
        assert_eq!(
            CliError::InputNotFound {
                path: PathBuf::from("x")
            }
            .exit_code(),
            3
        );
    }

    #[test]
    fn exit_code_configuration() {
        assert_eq!(
            CliError::ConfigError {
                message: "x".into(),
                source: None
            }
            .exit_code(),
            4
        );
    }

    #[test]
    fn exit_code_unbalanced() {
        assert_eq!(
            CliError::Unbalanced {
                unbalanced: 1,
                total: 1
            }
            .exit_code(),
            5
        );
    }

    #[test]
    fn exit_code_internal() {
        assert_eq!(
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            }
            .exit_code(),
            1
        );
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn render_plain_lists_hints() {
        let err = CliError::InputNotFound {
            path: PathBuf::from("/tmp/x"),
        };
        let s = err.render(false, false);
        assert!(s.starts_with("error: Input file not found: /tmp/x\n"));
        assert!(s.contains("  hint: Pass '-' or omit FILE to read from stdin"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn render_hides_cause_unless_verbose() {
        let err = CliError::IoError {
            message: "Failed to read line 3".into(),
            source: io::Error::other("disk on fire"),
        };

        let quiet = err.render(false, false);
        assert!(!quiet.contains("disk on fire"));
        assert!(quiet.contains("run with -v"));

        let verbose = err.render(true, false);
        assert!(verbose.contains("caused by: disk on fire"));
        assert!(!verbose.contains("run with -v"));
    }

    #[test]
    fn render_without_source_has_no_verbose_hint() {
        let err = CliError::Unbalanced {
            unbalanced: 2,
            total: 2,
        };
        assert!(!err.render(false, false).contains("run with -v"));
    }

    // ── IntoCli ───────────────────────────────────────────────────────────

    #[test]
    fn into_cli_io_error() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let cli: CliResult<()> = result.with_cli_context(|| "reading config");
        assert!(matches!(cli, Err(CliError::IoError { .. })));
    }
}
