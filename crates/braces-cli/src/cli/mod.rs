//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "braces",
    bin_name = "braces",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Check that brackets are balanced",
    long_about = "braces checks that every (, [ and { has a matching, correctly \
                  nested closer. All other characters are ignored.",
    after_help = "EXAMPLES:\n\
        \x20 braces demo\n\
        \x20 braces check '{[]()}' '([)]'\n\
        \x20 braces batch inputs.txt --strict\n\
        \x20 printf '()\\n(]\\n' | braces batch\n\
        \x20 braces completions bash > /usr/share/bash-completion/completions/braces",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the built-in example and print the result.
    #[command(about = "Check the built-in example string")]
    Demo,

    /// Check strings given on the command line.
    #[command(
        visible_alias = "c",
        about = "Check one or more strings",
        after_help = "EXAMPLES:\n\
            \x20 braces check '{[]()}'\n\
            \x20 braces check '([)]' '()' --explain\n\
            \x20 braces check -- '-(x)'     # inputs starting with '-'"
    )]
    Check(CheckArgs),

    /// Check one string per line from a file or stdin.
    #[command(
        visible_alias = "b",
        about = "Check one string per line from a file or stdin",
        after_help = "EXAMPLES:\n\
            \x20 braces batch inputs.txt\n\
            \x20 cat inputs.txt | braces batch\n\
            \x20 braces batch - --strict"
    )]
    Batch(BatchArgs),

    /// Print the version banner.
    #[command(about = "Print the version banner")]
    Version,

    /// Initialise a braces configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 braces init           # default location\n\
            \x20 braces init --force   # overwrite an existing file"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 braces completions bash > ~/.local/share/bash-completion/completions/braces\n\
            \x20 braces completions zsh  > ~/.zfunc/_braces\n\
            \x20 braces completions fish > ~/.config/fish/completions/braces.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the braces configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 braces config get output.format\n\
            \x20 braces config list\n\
            \x20 braces config path"
    )]
    Config(ConfigCommands),
}

// ── check ─────────────────────────────────────────────────────────────────────

/// Arguments for `braces check`.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Strings to check, in order.
    #[arg(value_name = "INPUT", required = true, help = "Strings to check")]
    pub inputs: Vec<String>,

    /// Explain why an input is unbalanced.
    #[arg(short = 'e', long = "explain", help = "Explain NO results")]
    pub explain: bool,

    /// Fail (exit 5) if any input is unbalanced.
    #[arg(long = "strict", help = "Exit with code 5 if any input is unbalanced")]
    pub strict: bool,
}

// ── batch ─────────────────────────────────────────────────────────────────────

/// Arguments for `braces batch`.
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// File with one input per line.  `-` or omitted reads stdin.
    #[arg(value_name = "FILE", help = "Input file (default: stdin)")]
    pub file: Option<PathBuf>,

    /// Explain why an input is unbalanced.
    #[arg(short = 'e', long = "explain", help = "Explain NO results")]
    pub explain: bool,

    /// Fail (exit 5) if any input is unbalanced.
    #[arg(long = "strict", help = "Exit with code 5 if any input is unbalanced")]
    pub strict: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `braces init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `braces completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `braces config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `output.format`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
