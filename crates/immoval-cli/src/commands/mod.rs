mod doctor;
mod domains;
mod locate;
mod predict;

use std::path::Path;

use anyhow::Result;

use immoval_core::config::LayeredConfig;

use crate::cli::{Cli, Commands};
use crate::output::OutputWriter;

/// Execute the parsed command
pub fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Predict(args) => predict::execute(args, &config, &output),
        Commands::Domains(args) => domains::execute(args, &config, &output),
        Commands::Locate(args) => locate::execute(args, &config, &output),
        Commands::Doctor(args) => doctor::execute(args, &config, &output),
    }
}

/// Defaults, then the optional config file, then the environment.
fn load_config(path: Option<&Path>) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();
    if let Some(path) = path {
        config = config.load_from_file(path)?;
    }
    Ok(config.load_from_env())
}
