//! breeze: command-line front end for the Breeze configuration loader.
//!
//! Prints command output on stdout and logs on stderr. Any error is printed
//! with its field path or pattern and the process exits with status 1.

mod cli;
mod commands;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = cli::parse();

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or("breeze=info");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| "breeze=info".parse().unwrap()),
            ),
        )
        .init();

    tracing::debug!("breeze v{} starting", env!("CARGO_PKG_VERSION"));

    match commands::run(&args.command) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
