pub mod advisor;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod feedback;

use std::io;

use crate::cli::Cli;
use crate::errors::CourseBuddyResult;

/// Install the stderr subscriber. `RUST_LOG` overrides `default_level`.
pub fn init_tracing(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .try_init();
}

pub fn run(args: Cli) -> CourseBuddyResult<()> {
    // Load .env file if present (ignore error if not found)
    let _ = dotenvy::dotenv();
    init_tracing(&args.log_level);

    let mut config = config::load_config(args.config.as_deref())?;
    if let Some(path) = args.feedback_file {
        tracing::debug!(path = %path.display(), "feedback file overridden from command line");
        config.storage.feedback_file = path;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::execute(args.command, &config, stdin.lock(), stdout.lock(), &mut io::stderr())
}
