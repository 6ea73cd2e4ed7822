use anyhow::Context as _;
use std::io::Write;

use super::{code::ResultCode, service::UnlockService};

/// What became of a single unlock request.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnlockOutcome {
    Succeeded,
    Failed(ResultCode),
}

impl From<ResultCode> for UnlockOutcome {
    fn from(code: ResultCode) -> Self {
        if code.is_success() {
            UnlockOutcome::Succeeded
        } else {
            UnlockOutcome::Failed(code)
        }
    }
}

impl UnlockOutcome {
    pub fn exit(&self) -> ProcessExit {
        match self {
            UnlockOutcome::Succeeded => ProcessExit::Success,
            UnlockOutcome::Failed(_) => ProcessExit::Failure,
        }
    }
}

impl std::fmt::Display for UnlockOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            UnlockOutcome::Succeeded => write!(f, "Successfully unlocked"),
            UnlockOutcome::Failed(code) => write!(f, "Error unlocking keyring: {}", code),
        }
    }
}

/// The exit status of the program.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProcessExit {
    Success,
    Failure,
}

impl ProcessExit {
    pub fn code(self) -> u8 {
        match self {
            ProcessExit::Success => 0,
            ProcessExit::Failure => 1,
        }
    }
}

impl From<ProcessExit> for std::process::ExitCode {
    fn from(exit: ProcessExit) -> Self {
        std::process::ExitCode::from(exit.code())
    }
}

/// Asks a keyring service to unlock its default collection and reports how it
/// went.
#[derive(Debug)]
pub struct Unlocker<S> {
    service: S,
}

impl<S: UnlockService> Unlocker<S> {
    pub fn new(service: S) -> Self {
        Unlocker { service }
    }

    /// Make exactly one unlock call and write exactly one line to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> anyhow::Result<ProcessExit> {
        let code = self.service.unlock_default_collection();
        log::debug!(
            "Unlock returned {} ({})",
            code,
            code.name().unwrap_or("unrecognized")
        );

        let outcome = UnlockOutcome::from(code);
        writeln!(out, "{}", outcome).context("Could not write unlock result")?;
        out.flush().context("Could not write unlock result")?;
        Ok(outcome.exit())
    }
}
