use std::process::ExitCode;

use clap::Parser;
use disksnap::cli::Cli;
use disksnap::commands;
use disksnap::logging::init::init_tracing;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = init_tracing(cli.verbose) {
        eprintln!("ERROR: {err:#}");
        return ExitCode::FAILURE;
    }

    // Single exit-code decision point: every failure below propagates here.
    match commands::dispatch(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR: {err:#}");
            ExitCode::FAILURE
        }
    }
}
