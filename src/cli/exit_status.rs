use std::process::ExitCode;

/// Process exit status of a `locus` command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Sources are clean (warnings allowed) or the lookup produced a value.
    Success,
    /// `check` found errors, `init` found an existing config, or a strict lookup missed.
    Failure,
    /// The command could not run: bad config, unreadable source, invalid pattern.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        })
    }
}
