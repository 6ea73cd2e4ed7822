use super::{secret_service::SecretServiceBackend, unlocker::Unlocker, ProcessExit};

/// Unlock the default keyring collection.
///
/// Prints one line saying whether the unlock worked and exits with 0 on
/// success or 1 on any failure.
#[derive(Debug, clap::Parser)]
#[clap(name = "unlock-keyring", version)]
pub struct Args {}

impl Args {
    pub fn run(&self) -> anyhow::Result<ProcessExit> {
        let stdout = std::io::stdout();
        let mut stdout = stdout.lock();
        Unlocker::new(SecretServiceBackend::new()).run(&mut stdout)
    }
}

/// The exit for a command line clap refused to turn into `Args`.
///
/// `--help` and `--version` are not errors and exit with success. Anything
/// else is a usage error and exits with failure, never clap's own status 2.
pub fn usage_exit(e: &clap::Error) -> ProcessExit {
    if e.use_stderr() {
        ProcessExit::Failure
    } else {
        ProcessExit::Success
    }
}

/// Print a clap error or help text and pick the exit for it.
pub fn report_usage(e: &clap::Error) -> ProcessExit {
    if let Err(print_err) = e.print() {
        log::warn!("Could not print usage: {}", print_err);
    }
    usage_exit(e)
}

/// Collapse the result of [`Args::run`] into an exit. Errors are printed to
/// stderr and exit with failure.
pub fn finish(result: anyhow::Result<ProcessExit>) -> ProcessExit {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {:?}", e);
        ProcessExit::Failure
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{code::ResultCode, service::UnlockService};
    use clap::Parser as _;

    #[test]
    fn takes_no_arguments() {
        assert!(Args::try_parse_from(["unlock-keyring"]).is_ok());
        assert!(Args::try_parse_from(["unlock-keyring", "login"]).is_err());
        assert!(Args::try_parse_from(["unlock-keyring", "--collection", "login"]).is_err());
    }

    #[test]
    fn usage_errors_exit_with_one() {
        for argv in [
            &["unlock-keyring", "bogus"][..],
            &["unlock-keyring", "--collection", "login"][..],
        ] {
            let e = Args::try_parse_from(argv.iter().copied()).unwrap_err();
            let exit = usage_exit(&e);
            assert_eq!(exit, ProcessExit::Failure, "{:?}", argv);
            assert_eq!(exit.code(), 1);
        }
    }

    #[test]
    fn help_and_version_exit_with_zero() {
        for flag in ["--help", "--version"] {
            let e = Args::try_parse_from(["unlock-keyring", flag]).unwrap_err();
            assert_eq!(usage_exit(&e).code(), 0, "{}", flag);
        }
    }

    #[test]
    fn run_errors_exit_with_one() {
        assert_eq!(finish(Ok(ProcessExit::Success)).code(), 0);
        assert_eq!(finish(Ok(ProcessExit::Failure)).code(), 1);
        assert_eq!(finish(Err(anyhow::anyhow!("stdout closed"))).code(), 1);
    }

    #[test]
    fn closed_stdout_exits_with_one() {
        struct Granted;
        impl UnlockService for Granted {
            fn unlock(&self, _: &crate::service::UnlockRequest) -> ResultCode {
                ResultCode::OK
            }
        }
        struct Closed;
        impl std::io::Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::ErrorKind::BrokenPipe.into())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let exit = finish(Unlocker::new(Granted).run(&mut Closed));
        assert_eq!(exit, ProcessExit::Failure);
        assert_eq!(exit.code(), 1);
    }
}
