//! Command handlers, one module per subcommand.
//!
//! Handlers translate parsed arguments into calls on `braces-core` and hand
//! the results to the [`crate::output::OutputManager`]. No checking logic
//! lives here.

pub mod batch;
pub mod check;
pub mod completions;
pub mod config;
pub mod demo;
pub mod init;
pub mod report;
pub mod version;
