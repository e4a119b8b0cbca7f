//! findex CLI - Boolean and vector space search over a local document index.

use std::process::ExitCode;

use clap::Parser;
use findex_core::FindexError;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli::run(cli) {
        Ok(code) => code,
        Err(err) => report(&err),
    }
}

/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn report(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<FindexError>() {
        Some(e) => {
            tracing::info!(error = %format!("{err:#}"), "Command failed");
            eprintln!("error: {}", e.user_message());
            ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(1))
        }
        None => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
