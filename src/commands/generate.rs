//! `netroute generate` command - random topologies

use serde_json::json;

use crate::cli::output::print_json;
use crate::cli::{Cli, GenerateArgs, OutputFormat};
use crate::commands::dispatch::open_store;
use netroute_core::config::Config;
use netroute_core::error::Result;
use netroute_core::generate::{random_topology, GenerateOptions};

pub fn execute(cli: &Cli, config: &Config, args: &GenerateArgs) -> Result<()> {
    let options = GenerateOptions {
        nodes: args.nodes.unwrap_or(config.generate.nodes),
        density: args.density.unwrap_or(config.generate.density),
        max_weight: args.max_weight.unwrap_or(config.generate.max_weight),
        seed: args.seed,
    };
    let graph = random_topology(&options)?;

    if !args.save {
        return print_json(&graph);
    }

    let store = open_store(cli, config)?;
    let id = store.save(&graph, args.name.as_deref(), None)?;
    match cli.format {
        OutputFormat::Json => print_json(&json!({
            "id": id,
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
        }))?,
        OutputFormat::Human => println!("{id}"),
    }
    Ok(())
}
