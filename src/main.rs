use std::process::ExitCode;

use clap::Parser;
use coursebuddy_lib::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match coursebuddy_lib::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "coursebuddy failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
