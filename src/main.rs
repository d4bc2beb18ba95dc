//! netroute - network routing simulator CLI
//!
//! Loads weighted topologies, runs one of five shortest-path algorithms
//! (or all of them side by side), and manages a local store of named
//! topologies.

mod cli;
mod commands;

use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use netroute_core::error::{ExitCode as RouteExitCode, RouteError};
use netroute_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return parse_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit(RouteExitCode::Success),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }
            exit(e.exit_code())
        }
    }
}

fn exit(code: RouteExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Report an argument error. `Cli` is not available yet, so whether to
/// answer with a JSON envelope is decided from raw argv.
fn parse_failure(err: clap::Error) -> ExitCode {
    let wants_json = json_requested(std::env::args().skip(1));
    let kind = err.kind();
    if !wants_json || matches!(kind, ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        err.exit();
    }

    let route_error = match kind {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => RouteError::UsageError(err.to_string()),
        _ => RouteError::Other(err.to_string()),
    };
    eprintln!("{}", route_error.to_json());
    exit(route_error.exit_code())
}

fn json_requested(args: impl Iterator<Item = String>) -> bool {
    let mut args = args.peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.peek().is_some_and(|v| v == "json") => return true,
            _ => {}
        }
    }
    false
}
