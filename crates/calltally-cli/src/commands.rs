use super::args::{Cli, Commands};
use super::handlers;
use crate::config::Config;
use anyhow::Result;
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load_from(&cli.config)?;
    let paths = config.pipeline_paths(&cli.paths);
    debug!(config = %cli.config.display(), ?paths, "resolved paths");

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => handlers::run::handle(&paths, &config.csv_options(), cli.format),
        Commands::Dump => handlers::dump::handle(&paths, cli.format),
    }
}
