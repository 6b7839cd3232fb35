//! `braces demo`: check the built-in example string.

use serde_json::json;

use crate::{cli::OutputFormat, error::CliResult, output::OutputManager};

pub const DEMO_INPUT: &str = "{[]()}";

pub fn execute(output: OutputManager) -> CliResult<()> {
    let balanced = braces_core::is_balanced(DEMO_INPUT);

    match output.format() {
        OutputFormat::Json => output.json(&json!({ "input": DEMO_INPUT, "balanced": balanced }))?,
        OutputFormat::Human => output.print(&format!("{DEMO_INPUT} balanced: {balanced}"))?,
        _ => output.print(&balanced.to_string())?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_input_is_balanced() {
        assert!(braces_core::is_balanced(DEMO_INPUT));
    }
}
