//! Command-line interface layer for the `locus` binary.

use std::io;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod args;
mod commands;
mod exit_status;
mod report;
mod run;

pub use args::{Arguments, Command, CommonArgs};
pub use exit_status::ExitStatus;
pub use report::{FAILURE_MARK, SUCCESS_MARK, report, report_to};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    init_tracing(args.verbose());

    let Some(command) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(command)
}

/// Install the stderr logger. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(ansi_enabled())
        .without_time()
        .try_init();
}

/// Log colors follow the same switch as the reporter's colored output.
fn ansi_enabled() -> bool {
    colored::control::SHOULD_COLORIZE.should_colorize()
}
