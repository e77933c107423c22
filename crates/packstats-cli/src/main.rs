//! packstats - Debian package statistics CLI

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use packstats_cli::Cli;
use packstats_cli::ui::{self, ConsoleReporter};
use packstats_core::pipeline;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::print_error(&err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = cli.config();
    tracing::info!("Ranking {} packages from {}", config.arch, config.mirror_url);

    let reporter = ConsoleReporter::new(cli.quiet);
    let ranked = pipeline::run_http(&config, &reporter).await?;

    ui::print_table(&ranked).context("Failed to write results")?;
    Ok(())
}
