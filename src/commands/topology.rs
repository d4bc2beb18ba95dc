//! `netroute topology` commands - save, load and list stored topologies

use std::path::Path;

use serde_json::json;

use crate::cli::output::print_json;
use crate::cli::{Cli, OutputFormat, TopologyCommands};
use crate::commands::dispatch::open_store;
use crate::commands::io::read_graph;
use netroute_core::config::Config;
use netroute_core::error::Result;
use netroute_core::store::TopologyStore;

pub fn execute(cli: &Cli, config: &Config, command: &TopologyCommands) -> Result<()> {
    let store = open_store(cli, config)?;
    match command {
        TopologyCommands::Save { file, name, id } => {
            save(cli, &store, file, name.as_deref(), id.as_deref())
        }
        TopologyCommands::Load { id } => load(cli, &store, id),
        TopologyCommands::List => list(cli, &store),
    }
}

fn save(
    cli: &Cli,
    store: &TopologyStore,
    file: &Path,
    name: Option<&str>,
    id: Option<&str>,
) -> Result<()> {
    let graph = read_graph(file)?;
    let id = store.save(&graph, name, id)?;
    match cli.format {
        OutputFormat::Json => print_json(&json!({ "id": id }))?,
        OutputFormat::Human => println!("{id}"),
    }
    Ok(())
}

fn load(cli: &Cli, store: &TopologyStore, id: &str) -> Result<()> {
    let entry = store.load(id)?;
    match cli.format {
        OutputFormat::Json => print_json(&entry),
        // Bare graph, usable as `--graph -` input
        OutputFormat::Human => print_json(&entry.topology),
    }
}

fn list(cli: &Cli, store: &TopologyStore) -> Result<()> {
    let summaries = store.list()?;
    match cli.format {
        OutputFormat::Json => print_json(&summaries)?,
        OutputFormat::Human => {
            if summaries.is_empty() && !cli.quiet {
                println!("No saved topologies");
            }
            for summary in &summaries {
                println!(
                    "{}  {}  {}  {} nodes, {} edges",
                    summary.id,
                    summary.name,
                    summary.created_at.format("%Y-%m-%d %H:%M:%S"),
                    summary.nodes,
                    summary.edges
                );
            }
        }
    }
    Ok(())
}
