//! `netroute compare` command - every algorithm on one query

use crate::cli::output::{format_distance, format_path, print_json};
use crate::cli::{Cli, CompareArgs, OutputFormat};
use crate::commands::io::load_graph;
use netroute_core::config::Config;
use netroute_core::engine::{self, Comparison, Outcome};
use netroute_core::error::Result;
use netroute_core::graph::Options;
use netroute_core::request::validate_endpoints;

pub fn execute(cli: &Cli, config: &Config, args: &CompareArgs) -> Result<()> {
    let graph = load_graph(cli, config, &args.source)?;
    let (from, to) = (&args.endpoints.from, &args.endpoints.to);
    validate_endpoints(&graph, from, to)?;

    let options = Options {
        directed: args.direction.resolve(config.engine.directed),
    };
    let rows = engine::compare(&graph, from, to, &options)?;

    match cli.format {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Human => print_table(&rows, cli.quiet),
    }
    Ok(())
}

fn print_table(rows: &[Comparison], quiet: bool) {
    if !quiet {
        println!(
            "{:<16} {:>5} {:>10} {:>10}  PATH",
            "ALGORITHM", "HOPS", "DISTANCE", "TIME_MS"
        );
    }
    for row in rows {
        match &row.outcome {
            Outcome::Result(result) => println!(
                "{:<16} {:>5} {:>10} {:>10.3}  {}",
                row.algorithm.as_str(),
                result.metrics.hops,
                format_distance(result.metrics.distance),
                result.metrics.time_ms,
                format_path(&result.path)
            ),
            Outcome::Error(message) => {
                println!("{:<16} error: {}", row.algorithm.as_str(), message)
            }
        }
    }
}
