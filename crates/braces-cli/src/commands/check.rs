//! `braces check`: check strings passed as arguments.

use tracing::instrument;

use crate::{
    cli::CheckArgs,
    commands::report::{self, CheckRecord, ReportOptions},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(inputs = args.inputs.len()))]
pub fn execute(args: CheckArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let opts = ReportOptions {
        explain: args.explain || config.check.explain,
        strict: args.strict || config.check.strict,
    };

    let records: Vec<CheckRecord> = args.inputs.into_iter().map(CheckRecord::evaluate).collect();
    report::emit(&records, opts, &output)
}
