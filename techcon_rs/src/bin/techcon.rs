use std::process::ExitCode;

use clap::Parser;
use techcon::cli::{Cli, run};
use tracing::error;

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    let mut stdout = std::io::stdout().lock();
    match run(&cli, &mut stdout) {
        Ok(code) => code,
        Err(err) => {
            error!("{err:#}");
            eprintln!("techcon: {err:#}");
            ExitCode::FAILURE
        }
    }
}
