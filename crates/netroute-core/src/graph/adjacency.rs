use std::collections::HashMap;

use crate::bail_graph;
use crate::error::Result;
use crate::graph::types::{Graph, Options};

/// Dense node index assigned in graph order
pub type NodeIndex = usize;

/// A directed arc used for relaxation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub weight: f64,
}

/// Per-call adjacency structure built from an immutable [`Graph`].
///
/// Nodes are addressed by a dense index so the searches can use flat
/// vectors instead of string-keyed maps. Every node of the graph has an
/// entry, isolated nodes included.
#[derive(Debug, Clone)]
pub struct Adjacency {
    ids: Vec<String>,
    index: HashMap<String, NodeIndex>,
    neighbors: Vec<Vec<(NodeIndex, f64)>>,
    arcs: Vec<Arc>,
    rank: Vec<usize>,
    directed: bool,
}

impl Adjacency {
    /// Build the adjacency lists, honoring `options.directed`.
    ///
    /// An undirected edge contributes `source -> target` followed by
    /// `target -> source`. Neighbor lists keep edge insertion order.
    pub fn build(graph: &Graph, options: &Options) -> Result<Self> {
        let ids: Vec<String> = graph.nodes().iter().map(|n| n.id.clone()).collect();
        let index: HashMap<String, NodeIndex> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (id.clone(), i))
            .collect();

        let mut neighbors: Vec<Vec<(NodeIndex, f64)>> = vec![Vec::new(); ids.len()];
        let arc_capacity = if options.directed {
            graph.edge_count()
        } else {
            graph.edge_count() * 2
        };
        let mut arcs = Vec::with_capacity(arc_capacity);

        for edge in graph.edges() {
            let (Some(&from), Some(&to)) = (index.get(&edge.source), index.get(&edge.target))
            else {
                bail_graph!(
                    "edge {} -> {} references a node outside the graph",
                    edge.source,
                    edge.target
                );
            };

            neighbors[from].push((to, edge.weight));
            arcs.push(Arc {
                from,
                to,
                weight: edge.weight,
            });

            if !options.directed {
                neighbors[to].push((from, edge.weight));
                arcs.push(Arc {
                    from: to,
                    to: from,
                    weight: edge.weight,
                });
            }
        }

        // rank[i] is the position of node i when ids are sorted ascending
        let mut order: Vec<NodeIndex> = (0..ids.len()).collect();
        order.sort_by(|&a, &b| ids[a].cmp(&ids[b]));
        let mut rank = vec![0; ids.len()];
        for (position, &node) in order.iter().enumerate() {
            rank[node] = position;
        }

        Ok(Adjacency {
            ids,
            index,
            neighbors,
            arcs,
            rank,
            directed: options.directed,
        })
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn id(&self, node: NodeIndex) -> &str {
        &self.ids[node]
    }

    /// Outgoing `(neighbor, weight)` pairs in edge insertion order
    pub fn neighbors(&self, node: NodeIndex) -> &[(NodeIndex, f64)] {
        &self.neighbors[node]
    }

    /// Relaxation arcs in edge insertion order
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Ascending-id rank of a node, used to break priority ties
    pub fn rank(&self, node: NodeIndex) -> usize {
        self.rank[node]
    }

    /// True if an arc `from -> to` exists
    pub fn has_arc(&self, from: NodeIndex, to: NodeIndex) -> bool {
        self.neighbors[from].iter().any(|&(n, _)| n == to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::{Edge, Node};

    fn graph() -> Graph {
        Graph::new(
            vec![Node::new("C"), Node::new("A"), Node::new("B"), Node::new("Z")],
            vec![Edge::new("A", "B", 2.0), Edge::new("B", "C", 3.0)],
        )
        .unwrap()
    }

    #[test]
    fn test_undirected_inserts_both_arcs() {
        let adj = Adjacency::build(&graph(), &Options::default()).unwrap();
        let a = adj.index_of("A").unwrap();
        let b = adj.index_of("B").unwrap();
        let c = adj.index_of("C").unwrap();

        assert_eq!(adj.neighbors(a), &[(b, 2.0)]);
        assert_eq!(adj.neighbors(b), &[(a, 2.0), (c, 3.0)]);
        assert_eq!(adj.arcs().len(), 4);
        assert!(adj.has_arc(c, b));
    }

    #[test]
    fn test_directed_inserts_forward_only() {
        let adj = Adjacency::build(&graph(), &Options::directed()).unwrap();
        let b = adj.index_of("B").unwrap();
        let c = adj.index_of("C").unwrap();

        assert!(adj.has_arc(b, c));
        assert!(!adj.has_arc(c, b));
        assert_eq!(adj.arcs().len(), 2);
        assert!(adj.is_directed());
    }

    #[test]
    fn test_isolated_node_present() {
        let adj = Adjacency::build(&graph(), &Options::default()).unwrap();
        let z = adj.index_of("Z").unwrap();
        assert!(adj.neighbors(z).is_empty());
        assert_eq!(adj.len(), 4);
    }

    #[test]
    fn test_rank_follows_id_order() {
        let adj = Adjacency::build(&graph(), &Options::default()).unwrap();
        let ranks: Vec<usize> = ["A", "B", "C", "Z"]
            .iter()
            .map(|id| adj.rank(adj.index_of(id).unwrap()))
            .collect();
        assert_eq!(ranks, vec![0, 1, 2, 3]);
        // Index order stays graph order
        assert_eq!(adj.id(0), "C");
    }
}
