//! Weighted co-author adjacency
//!
//! In-memory adjacency built from the raw coauthor records. Storage is
//! asymmetric on purpose: an owner's view of a coauthor lives under the
//! owner and is not mirrored, so both directions of a pair survive
//! independently when the records disagree.

use super::{undirected, CollabEdge, CollabGraph};
use facdash_common::models::CoauthorRecord;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Weighted adjacency over professor names.
///
/// Ordered maps keep every derived iteration deterministic regardless
/// of record order in the source document.
#[derive(Debug, Clone, Default)]
pub struct CoauthorAdjacency {
    /// Every name seen as a record owner or as someone's coauthor
    nodes: BTreeSet<String>,

    /// owner -> coauthor -> joint publication count
    weights: BTreeMap<String, BTreeMap<String, u32>>,
}

impl CoauthorAdjacency {
    /// Build the adjacency from raw coauthor records.
    ///
    /// Malformed input is not handled here; the store fails the whole
    /// load before records ever reach this point.
    pub fn from_records(records: &[CoauthorRecord]) -> Self {
        let mut adjacency = Self::default();

        for record in records {
            adjacency.nodes.insert(record.name.clone());
            let row = adjacency.weights.entry(record.name.clone()).or_default();

            for entry in &record.coauthors {
                adjacency.nodes.insert(entry.name.clone());
                row.insert(entry.name.clone(), entry.times);
            }
        }

        adjacency
    }

    /// Every known professor name, sorted
    pub fn nodes(&self) -> impl Iterator<Item = &String> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The owner's stored view of one coauthor, if listed
    pub fn weight(&self, owner: &str, coauthor: &str) -> Option<u32> {
        self.weights.get(owner).and_then(|row| row.get(coauthor)).copied()
    }

    /// Iterate (owner, coauthor -> count) rows in name order
    pub(crate) fn rows(&self) -> impl Iterator<Item = (&String, &BTreeMap<String, u32>)> {
        self.weights.iter()
    }

    /// One owner's full coauthor row, if the owner has a record
    pub(crate) fn row(&self, owner: &str) -> Option<&BTreeMap<String, u32>> {
        self.weights.get(owner)
    }

    /// Derive the global faculty network.
    ///
    /// One undirected edge per (owner, coauthor) pair. When a pair is
    /// present in both directions the edge is written twice and the
    /// last write wins — counts are NOT reconciled. Owners iterate in
    /// name order, so "last" is the lexicographically later owner and
    /// the result is deterministic.
    pub fn global_graph(&self) -> CollabGraph {
        let mut edges: BTreeMap<(String, String), u32> = BTreeMap::new();

        for (owner, row) in &self.weights {
            for (coauthor, &times) in row {
                let key = undirected(owner, coauthor);
                if let Some(&existing) = edges.get(&key) {
                    if existing != times {
                        debug!(
                            a = %key.0,
                            b = %key.1,
                            kept = times,
                            replaced = existing,
                            "Conflicting co-author counts; keeping the later direction"
                        );
                    }
                }
                edges.insert(key, times);
            }
        }

        CollabGraph {
            nodes: self.nodes.iter().cloned().collect(),
            edges: edges
                .into_iter()
                .map(|((source, target), weight)| CollabEdge { source, target, weight })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facdash_common::models::CoauthorEntry;

    fn record(name: &str, coauthors: &[(&str, u32)]) -> CoauthorRecord {
        CoauthorRecord {
            name: name.to_string(),
            coauthors: coauthors
                .iter()
                .map(|(n, times)| CoauthorEntry { name: n.to_string(), times: *times })
                .collect(),
        }
    }

    #[test]
    fn test_nodes_include_owners_and_coauthors() {
        let records = vec![record("A", &[("B", 2), ("C", 1)])];
        let adjacency = CoauthorAdjacency::from_records(&records);

        // B and C never own a record but still become nodes
        assert_eq!(adjacency.node_count(), 3);
        assert_eq!(adjacency.weight("A", "B"), Some(2));
        assert_eq!(adjacency.weight("B", "A"), None);
    }

    #[test]
    fn test_asymmetric_storage_keeps_both_directions() {
        let records = vec![record("A", &[("B", 5)]), record("B", &[("A", 3)])];
        let adjacency = CoauthorAdjacency::from_records(&records);

        assert_eq!(adjacency.weight("A", "B"), Some(5));
        assert_eq!(adjacency.weight("B", "A"), Some(3));
    }

    #[test]
    fn test_global_graph_symmetric_input_single_edge() {
        let records = vec![record("A", &[("B", 2)]), record("B", &[("A", 2)])];
        let graph = CoauthorAdjacency::from_records(&records).global_graph();

        assert_eq!(graph.nodes, vec!["A".to_string(), "B".to_string()]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight("A", "B"), Some(2));
    }

    #[test]
    fn test_global_graph_disagreement_last_owner_wins() {
        // A's record says 5, B's record says 3. Owners iterate in name
        // order, so B writes last and its count stands.
        let records = vec![record("A", &[("B", 5)]), record("B", &[("A", 3)])];
        let graph = CoauthorAdjacency::from_records(&records).global_graph();

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight("A", "B"), Some(3));
    }

    #[test]
    fn test_global_graph_deterministic_across_input_order() {
        let forward = vec![record("A", &[("B", 5)]), record("B", &[("A", 3)])];
        let reversed = vec![record("B", &[("A", 3)]), record("A", &[("B", 5)])];

        let g1 = CoauthorAdjacency::from_records(&forward).global_graph();
        let g2 = CoauthorAdjacency::from_records(&reversed).global_graph();
        assert_eq!(g1, g2);
    }

    #[test]
    fn test_global_graph_empty() {
        let graph = CoauthorAdjacency::from_records(&[]).global_graph();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
