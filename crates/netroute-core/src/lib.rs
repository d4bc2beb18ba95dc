//! Netroute Core Library
//!
//! Shortest-path engine for network routing simulation: a validated graph
//! model, five search algorithms behind a single [`engine::run`] entry
//! point, plus the topology store, random generator and path replay used
//! by the `netroute` CLI.

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod generate;
pub mod graph;
pub mod logging;
pub mod replay;
pub mod request;
pub mod store;
