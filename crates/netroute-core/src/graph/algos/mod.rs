//! Search algorithm implementations
//!
//! Each search consumes an [`Adjacency`](crate::graph::Adjacency) and returns a
//! [`SearchResult`]:
//! - `bfs`: unweighted shortest path (hop count)
//! - `dijkstra`: weighted shortest path, non-negative weights
//! - `bellman_ford`: weighted shortest path with negative weights and cycle detection
//! - `astar`: Dijkstra guided by a Euclidean heuristic over node coordinates
//! - `floyd_warshall`: all-pairs pre-computation with a next-hop table
//! - `shared`: priority queue entry and result types

pub mod astar;
pub mod bellman_ford;
pub mod bfs;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod shared;

pub use astar::{astar_search, euclidean};
pub use bellman_ford::bellman_ford_search;
pub use bfs::bfs_search;
pub use dijkstra::dijkstra_search;
pub use floyd_warshall::{all_pairs, floyd_warshall_search, AllPairs};
pub use shared::{HeapEntry, Routes, SearchResult};
