//! `braces version`: print the version banner.

use serde_json::json;

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

pub fn execute(output: OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(&json!({ "version": braces_core::VERSION }))?;
    } else if !output.is_quiet() {
        braces_core::print_version(std::io::stdout().lock())?;
    }
    Ok(())
}
