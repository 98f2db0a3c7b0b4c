use std::process::ExitCode;

/// Two-valued exit status: every subcommand in the CLI surface is 0-ok /
/// 1-failure (`diff` additionally treats a breaking change as failure, but
/// that's still expressed as `Failure`, not a third code).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
        }
    }
}

impl From<bool> for ExitStatus {
    /// `true` (command succeeded) maps to `Success`.
    fn from(ok: bool) -> Self {
        if ok { ExitStatus::Success } else { ExitStatus::Failure }
    }
}
