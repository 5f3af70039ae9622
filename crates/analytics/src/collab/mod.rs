//! Co-authorship graph construction
//!
//! Turns the flat per-professor coauthor records into a weighted
//! undirected graph: either the global faculty network or the
//! neighborhood of a single professor.

mod adjacency;
mod neighborhood;

pub use adjacency::CoauthorAdjacency;

use serde::{Deserialize, Serialize};

/// A weighted undirected edge between two professors. `source`/`target`
/// carry no direction; they are ordered lexicographically so equal
/// graphs serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollabEdge {
    pub source: String,
    pub target: String,

    /// Number of joint publications
    pub weight: u32,
}

/// A co-authorship graph as handed to the presentation layer: sorted
/// node names plus a sorted weighted edge list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollabGraph {
    pub nodes: Vec<String>,
    pub edges: Vec<CollabEdge>,
}

impl CollabGraph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.iter().any(|n| n == name)
    }

    /// Weight of the edge between two professors, in either order
    pub fn edge_weight(&self, a: &str, b: &str) -> Option<u32> {
        self.edges
            .iter()
            .find(|e| {
                (e.source == a && e.target == b) || (e.source == b && e.target == a)
            })
            .map(|e| e.weight)
    }
}

/// Normalize an unordered professor pair to a canonical (sorted) key
pub(crate) fn undirected(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}
