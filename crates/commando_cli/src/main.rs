//! CLI entry point for commando.

mod cli;
mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use commando_observability::ObservabilityConfig;

use crate::cli::Cli;

fn init_logging(cli: &Cli) -> Result<()> {
    let mut config = ObservabilityConfig::from_env();
    if cli.verbose {
        config = config.with_log_level("debug");
    }
    commando_observability::init(config).context("failed to initialize logging")
}

fn main() {
    // A missing .env is the normal case.
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    output::init(cli.output);

    if let Err(e) = init_logging(&cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }

    let dispatcher = commands::dispatcher();
    if let Err(err) = commands::handle(&dispatcher, &cli.tokens) {
        output::error(&err.to_string());
        output::usage(&commands::usage_hint(&dispatcher, &err));
        std::process::exit(1);
    }
}
