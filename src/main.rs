use clap::Parser as _;

use unlock_keyring::{finish, report_usage, Args};

fn main() -> std::process::ExitCode {
    pretty_env_logger::init();

    let exit = match Args::try_parse() {
        Ok(args) => finish(args.run()),
        Err(e) => report_usage(&e),
    };
    exit.into()
}
