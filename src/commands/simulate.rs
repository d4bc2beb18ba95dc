//! `netroute simulate` command - replay a path for animation
//!
//! Emits one JSON event per line and pauses after each step. Ctrl-C stops
//! the replay between events.

use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::cli::Cli;
use crate::commands::io::read_json;
use netroute_core::config::Config;
use netroute_core::error::Result;
use netroute_core::replay;

/// Any JSON object with a `path` array, typically a saved route result
#[derive(Debug, Deserialize)]
struct ReplayInput {
    path: Vec<String>,
}

pub fn execute(_cli: &Cli, config: &Config, file: &Path, delay_ms: Option<u64>) -> Result<()> {
    let input: ReplayInput = read_json(file)?;
    let delay = Duration::from_millis(delay_ms.unwrap_or(config.simulate.delay_ms));

    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);
    if let Err(e) = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    }) {
        debug!(error = %e, "ctrl-c handler not installed");
    }

    let mut stdout = std::io::stdout().lock();
    for event in replay::events(&input.path) {
        if interrupted.load(Ordering::SeqCst) {
            debug!("replay interrupted");
            break;
        }
        writeln!(stdout, "{}", serde_json::to_string(&event)?)?;
        stdout.flush()?;
        if !event.is_done() && !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    Ok(())
}
