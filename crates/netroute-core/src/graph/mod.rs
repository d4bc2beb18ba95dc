//! Graph model and path-finding operations
//!
//! - `types`: immutable graph value, engine options, trace events
//! - `adjacency`: per-call neighbor lists indexed by a dense node index
//! - `algos`: the five search algorithms
//! - `path`: predecessor / next-hop path reconstruction

pub mod adjacency;
pub mod algos;
pub mod path;
pub mod types;

pub use adjacency::{Adjacency, NodeIndex};
pub use algos::{Routes, SearchResult};
pub use path::reconstruct;
pub use types::{Edge, Graph, GraphData, Node, Options, TraceEvent, DEFAULT_WEIGHT};
