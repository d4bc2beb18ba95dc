//! Command dispatch logic for netroute

use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;
use netroute_core::config::Config;
use netroute_core::error::Result;
use netroute_core::store::TopologyStore;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::load()?;
    debug!(elapsed = ?start.elapsed(), "load_config");

    let result = match &cli.command {
        Commands::Route(args) => commands::route::execute(cli, &config, args),
        Commands::Request { file } => commands::request::execute(cli, &config, file),
        Commands::Compare(args) => commands::compare::execute(cli, &config, args),
        Commands::Topology(command) => commands::topology::execute(cli, &config, command),
        Commands::Generate(args) => commands::generate::execute(cli, &config, args),
        Commands::Simulate { file, delay_ms } => {
            commands::simulate::execute(cli, &config, file, *delay_ms)
        }
    };

    debug!(elapsed = ?start.elapsed(), "execute_command");
    result
}

/// Open the topology store: `--store` wins over the configured directory
pub fn open_store(cli: &Cli, config: &Config) -> Result<TopologyStore> {
    let dir = match &cli.store {
        Some(dir) => dir.clone(),
        None => config.store_dir()?,
    };
    TopologyStore::open(&dir)
}
