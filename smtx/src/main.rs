use std::io;
use std::process::ExitCode;

use clap::Parser;
use smtx::cli::{run, Cli};
use tracing::error;

fn main() -> ExitCode {
    // Logs go to stderr (respects RUST_LOG); stdout carries matrix output only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();

    match run(cli, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
