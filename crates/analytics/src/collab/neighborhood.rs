//! Neighborhood subgraph derivation
//!
//! The induced subgraph around one professor: the center, every direct
//! collaborator, and weighted edges among those collaborators.

use super::{undirected, CoauthorAdjacency, CollabEdge, CollabGraph};
use std::collections::{BTreeMap, BTreeSet};

impl CoauthorAdjacency {
    /// Derive the neighborhood graph of `center`.
    ///
    /// First degree: every professor whose own record lists `center`,
    /// with the weight taken from that professor's record. The center's
    /// outgoing entries alone do not create neighbors.
    ///
    /// Second degree: for every first-degree neighbor, all of that
    /// neighbor's other coauthorships are accumulated per unordered
    /// pair — summed across both directions and all contributing paths,
    /// unlike the overwrite policy of the global graph. Professors who
    /// never worked with `center` still appear as nodes when a
    /// first-degree neighbor lists them.
    ///
    /// The center is always a node, even with zero collaborators.
    pub fn neighborhood_graph(&self, center: &str) -> CollabGraph {
        let mut nodes: BTreeSet<String> = BTreeSet::new();
        nodes.insert(center.to_string());

        let mut edges: BTreeMap<(String, String), u32> = BTreeMap::new();
        let mut first_degree: Vec<&String> = Vec::new();

        for (owner, row) in self.rows() {
            if owner.as_str() == center {
                continue;
            }
            if let Some(&weight) = row.get(center) {
                nodes.insert(owner.clone());
                edges.insert(undirected(center, owner), weight);
                first_degree.push(owner);
            }
        }

        // Collaboration strength among the collaborators themselves
        let mut collaboration_counts: BTreeMap<(String, String), u32> = BTreeMap::new();
        for owner in &first_degree {
            if let Some(row) = self.row(owner) {
                for (other, &weight) in row {
                    if other.as_str() != center && weight > 0 {
                        *collaboration_counts
                            .entry(undirected(owner, other))
                            .or_insert(0) += weight;
                    }
                }
            }
        }

        for ((a, b), total) in collaboration_counts {
            if total > 0 {
                nodes.insert(a.clone());
                nodes.insert(b.clone());
                edges.insert((a, b), total);
            }
        }

        CollabGraph {
            nodes: nodes.into_iter().collect(),
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
    use facdash_common::models::{CoauthorEntry, CoauthorRecord};

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
    fn test_center_always_present() {
        let graph = CoauthorAdjacency::from_records(&[]).neighborhood_graph("X");

        assert_eq!(graph.nodes, vec!["X".to_string()]);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_first_degree_uses_neighbor_side_weight() {
        // P's record lists X at 4; X's own record is irrelevant here
        let records = vec![record("P", &[("X", 4)]), record("X", &[("P", 9)])];
        let graph = CoauthorAdjacency::from_records(&records).neighborhood_graph("X");

        assert!(graph.contains_node("P"));
        assert_eq!(graph.edge_weight("X", "P"), Some(4));
    }

    #[test]
    fn test_center_outgoing_entries_do_not_create_neighbors() {
        // Only X's own record mentions P; P has no record listing X
        let records = vec![record("X", &[("P", 9)])];
        let graph = CoauthorAdjacency::from_records(&records).neighborhood_graph("X");

        assert_eq!(graph.nodes, vec!["X".to_string()]);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_second_degree_weights_sum_across_paths() {
        // Center X with neighbors P and Q; P lists (Q,3), Q lists (P,2)
        let records = vec![
            record("P", &[("X", 1), ("Q", 3)]),
            record("Q", &[("X", 1), ("P", 2)]),
        ];
        let graph = CoauthorAdjacency::from_records(&records).neighborhood_graph("X");

        assert_eq!(graph.edge_weight("P", "Q"), Some(5));
        assert_eq!(graph.edge_weight("X", "P"), Some(1));
        assert_eq!(graph.edge_weight("X", "Q"), Some(1));
    }

    #[test]
    fn test_second_degree_includes_outside_collaborators() {
        // R never worked with X but is listed by X's neighbor P
        let records = vec![record("P", &[("X", 2), ("R", 6)])];
        let graph = CoauthorAdjacency::from_records(&records).neighborhood_graph("X");

        assert!(graph.contains_node("R"));
        assert_eq!(graph.edge_weight("P", "R"), Some(6));
        assert_eq!(graph.edge_weight("X", "R"), None);
    }

    #[test]
    fn test_zero_weight_entries_are_skipped() {
        let records = vec![record("P", &[("X", 2), ("R", 0)])];
        let graph = CoauthorAdjacency::from_records(&records).neighborhood_graph("X");

        assert!(!graph.contains_node("R"));
    }
}
