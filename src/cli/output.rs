//! Output helpers shared by commands

use serde::Serialize;

use netroute_core::error::Result;
pub use netroute_core::format::OutputFormat;

/// Pretty-print a value as JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a distance without trailing zeros (`2` rather than `2.0`)
pub fn format_distance(distance: Option<f64>) -> String {
    match distance {
        Some(d) => format!("{}", d),
        None => "-".to_string(),
    }
}

/// `A -> B -> C`, or `(none)` for an empty path
pub fn format_path(path: &[String]) -> String {
    if path.is_empty() {
        "(none)".to_string()
    } else {
        path.join(" -> ")
    }
}
