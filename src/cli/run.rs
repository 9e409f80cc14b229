use anyhow::Result;

use super::{
    args::Command,
    commands::{check::check, init::init, keys::keys, lookup::lookup},
    exit_status::ExitStatus,
};

/// Dispatch a parsed command to its handler.
///
/// # Returns
/// - `Ok(ExitStatus)` describing whether issues were found
/// - `Err` if the command could not run (unreadable config, invalid pattern, ...)
pub fn run(command: Command) -> Result<ExitStatus> {
    match command {
        Command::Check(cmd) => check(cmd),
        Command::Keys(cmd) => keys(cmd),
        Command::Lookup(cmd) => lookup(cmd),
        Command::Init => init(),
    }
}
