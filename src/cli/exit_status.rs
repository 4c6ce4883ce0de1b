use std::process::ExitCode;

/// Exit status of a run.
///
/// - `Success` (0): Run completed (listings rewritten, or nothing to do)
/// - `Failure` (1): Dry run found annotations that were not applied
/// - `Error` (2): Run aborted (missing declaration document, write failure, ...)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed successfully.
    Success,
    /// Dry run found work to do.
    Failure,
    /// Run aborted on a fatal error.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
