//! Immoval CLI - Command-line interface
//!
//! One-shot predictions and diagnostics against the same core the HTTP
//! adapter serves. Everything here is synchronous; there is no runtime.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    commands::execute(cli)
}
