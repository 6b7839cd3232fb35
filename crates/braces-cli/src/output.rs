//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use braces_core::{domain::Verdict, error::Imbalance};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// The `--output-format` flag wins over `output.format` from config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = args.output_format.unwrap_or(config.output.format);
        Self::with_format(
            resolve_format(requested, io::stdout().is_terminal()),
            args.quiet,
            args.no_color || config.output.no_color,
        )
    }

    fn with_format(resolved_format: OutputFormat, quiet: bool, no_color: bool) -> Self {
        Self {
            resolved_format,
            quiet,
            // Plain output is for pipes; never colour it.
            no_color: no_color || resolved_format == OutputFormat::Plain,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// One verdict line for a checked input.
    ///
    /// Plain output is the bare verdict so it can be diffed against expected
    /// `YES`/`NO` files.  Human output adds a marker and the input itself, and
    /// lists fix hints under the reason.
    pub fn verdict(&self, input: &str, verdict: Verdict, reason: Option<&Imbalance>) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = match self.resolved_format {
            OutputFormat::Human => self.human_verdict(input, verdict, reason),
            _ => match reason {
                Some(reason) => format!("{verdict} ({reason})"),
                None => verdict.to_string(),
            },
        };
        self.term.write_line(&line)
    }

    fn human_verdict(&self, input: &str, verdict: Verdict, reason: Option<&Imbalance>) -> String {
        const INDENT: &str = "\n       ";

        let mut line = match (verdict, self.no_color) {
            (Verdict::Yes, true) => format!("\u{2713} YES  {input}"),
            (Verdict::No, true) => format!("\u{2717} NO   {input}"),
            (Verdict::Yes, false) => format!("{} {}  {input}", "\u{2713}".green().bold(), "YES".green()),
            (Verdict::No, false) => format!("{} {}   {input}", "\u{2717}".red().bold(), "NO".red()),
        };
        let Some(reason) = reason else {
            return line;
        };

        line.push_str(INDENT);
        if self.no_color {
            line.push_str(&reason.to_string());
        } else {
            line.push_str(&reason.to_string().dimmed().to_string());
        }
        for hint in reason.suggestions() {
            line.push_str(INDENT);
            if self.no_color {
                line.push_str(&format!("\u{2192} {hint}")); // →
            } else {
                line.push_str(&format!("{} {}", "\u{2192}".yellow(), hint));
            }
        }
        line
    }

    /// Pretty-printed JSON document; suppressed in quiet mode.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

/// Resolve Auto → Human (TTY) or Plain (piped/redirected).
fn resolve_format(requested: OutputFormat, stdout_is_tty: bool) -> OutputFormat {
    match requested {
        OutputFormat::Auto if stdout_is_tty => OutputFormat::Human,
        OutputFormat::Auto => OutputFormat::Plain,
        other => other,
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(format: OutputFormat, quiet: bool, no_color: bool) -> OutputManager {
        OutputManager::with_format(format, quiet, no_color)
    }

    #[test]
    fn auto_resolves_by_terminal() {
        assert_eq!(resolve_format(OutputFormat::Auto, true), OutputFormat::Human);
        assert_eq!(resolve_format(OutputFormat::Auto, false), OutputFormat::Plain);
        assert_eq!(resolve_format(OutputFormat::Json, true), OutputFormat::Json);
    }

    #[test]
    fn flag_overrides_config_format() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            output_format: Some(OutputFormat::Plain),
            log_file: None,
        };
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;
        assert_eq!(OutputManager::new(&args, &config).format(), OutputFormat::Plain);
    }

    #[test]
    fn config_format_used_without_flag() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: None,
            log_file: None,
        };
        let mut config = AppConfig::default();
        config.output.format = OutputFormat::Json;
        config.output.no_color = true;
        let out = OutputManager::new(&args, &config);
        assert_eq!(out.format(), OutputFormat::Json);
        assert!(out.no_color);
    }

    #[test]
    fn plain_is_never_colored() {
        assert!(make_manager(OutputFormat::Plain, false, false).no_color);
        assert!(!make_manager(OutputFormat::Human, false, false).no_color);
    }

    #[test]
    fn human_verdict_without_color() {
        let out = make_manager(OutputFormat::Human, false, true);
        assert_eq!(out.human_verdict("()", Verdict::Yes, None), "\u{2713} YES  ()");
        let unclosed = Imbalance::Unclosed {
            index: 0,
            opener: '(',
        };
        assert_eq!(
            out.human_verdict("(", Verdict::No, Some(&unclosed)),
            "\u{2717} NO   (\n       '(' at position 0 is never closed\n       \u{2192} Close the '(' opened at position 0"
        );
    }

    #[test]
    fn human_verdict_lists_every_hint() {
        let out = make_manager(OutputFormat::Human, false, true);
        let stray = Imbalance::UnexpectedCloser {
            index: 2,
            found: ']',
        };
        let text = out.human_verdict("ab]", Verdict::No, Some(&stray));
        for hint in stray.suggestions() {
            assert!(text.contains(&hint), "missing hint {hint:?} in {text:?}");
        }
        assert_eq!(text.lines().count(), 2 + stray.suggestions().len());
    }

    #[test]
    fn quiet_suppresses_verdicts() {
        let out = make_manager(OutputFormat::Plain, true, true);
        assert!(out.is_quiet());
        assert!(out.verdict("()", Verdict::Yes, None).is_ok());
    }
}
