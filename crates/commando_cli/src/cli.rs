//! CLI argument definitions using clap derive macros.
//!
//! Only global options are parsed here. Everything from the first positional
//! token on is handed to the dispatcher untouched, including `--help`.

use clap::{Parser, ValueEnum};

/// Dispatch a command line to a registered handler
#[derive(Parser)]
#[command(name = "commando", about, version, disable_help_flag = true)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Command name followed by its arguments
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}
