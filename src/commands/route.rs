//! `netroute route` command - find a path between two nodes

use tracing::warn;

use crate::cli::output::{format_distance, format_path, print_json};
use crate::cli::{Cli, OutputFormat, RouteArgs};
use crate::commands::io::load_graph;
use netroute_core::config::Config;
use netroute_core::engine::{self, PathResult};
use netroute_core::error::Result;
use netroute_core::graph::{Options, TraceEvent};
use netroute_core::request::validate_endpoints;

pub fn execute(cli: &Cli, config: &Config, args: &RouteArgs) -> Result<()> {
    let graph = load_graph(cli, config, &args.source)?;
    let (from, to) = (&args.endpoints.from, &args.endpoints.to);
    validate_endpoints(&graph, from, to)?;

    let algorithm = args
        .algorithm
        .as_deref()
        .unwrap_or(config.engine.default_algorithm.as_str());
    let options = Options {
        directed: args.direction.resolve(config.engine.directed),
    };

    let result = engine::run(&graph, algorithm, from, to, &options)?;
    if result.substituted {
        warn!(requested = algorithm, "unknown algorithm, ran dijkstra instead");
    }

    print_result(cli, &result, args.steps)
}

/// Shared by `route` and `request`
pub fn print_result(cli: &Cli, result: &PathResult, show_steps: bool) -> Result<()> {
    match cli.format {
        OutputFormat::Json => print_json(result)?,
        OutputFormat::Human => {
            println!("{}", format_path(&result.path));
            if cli.quiet {
                return Ok(());
            }
            if result.substituted {
                println!("Algorithm: {} (fallback)", result.algorithm);
            } else {
                println!("Algorithm: {}", result.algorithm);
            }
            println!("Hops: {}", result.metrics.hops);
            println!("Distance: {}", format_distance(result.metrics.distance));
            println!("Time: {:.3} ms", result.metrics.time_ms);
            if show_steps {
                println!("Steps:");
                for (i, event) in result.steps.iter().enumerate() {
                    println!("  {:>3}. {}", i + 1, describe(event));
                }
            }
        }
    }
    Ok(())
}

fn describe(event: &TraceEvent) -> String {
    match event {
        TraceEvent::Visit { visit } => format!("visit {visit}"),
        TraceEvent::Pop { pop, dist } => format!("pop {pop} dist={dist}"),
        TraceEvent::Update { update, dist } => format!("update {update} dist={dist}"),
        TraceEvent::Expand { pop, f } => format!("pop {pop} f={f:.3}"),
    }
}
