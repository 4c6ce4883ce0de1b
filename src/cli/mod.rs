//! Command-line layer: argument parsing, the run driver, and console output.

pub mod args;
mod exit_status;
pub mod report;
mod run;
mod summary;

use anyhow::Result;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use summary::RunSummary;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    run::run(&args)
}
