/*!
Graph store for the routed network.

This module defines:
- `NetworkGraph`: node set plus adjacency map, with upsert/remove/reweight
  mutators and snapshot accessors.
- `GraphError`: store-level errors (`InvalidWeight`, `EdgeNotFound`).

Nodes and edges iterate in lexicographic label order. This is the documented
stable order relied on by the routing-table builder and by the deterministic
tie-breaks in the shortest-path engines.
*/

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network::edge::EdgeRecord;

/// Opaque router label (e.g. "R1"). Uniqueness is enforced by the store.
pub type RouterId = String;

/// Link weight. Ingestion rejects negatives, but the type admits them: a
/// reweighted snapshot may legally carry negative weights, which is exactly
/// the case Bellman-Ford exists for.
pub type Weight = i64;

// Struct variants here must not name a field `source`: thiserror reserves
// that name for the `Error::source()` cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("negative weight {weight} on link {src} -> {dst}")]
    InvalidWeight {
        src: RouterId,
        dst: RouterId,
        weight: Weight,
    },
    #[error("no link {src} -> {dst}")]
    EdgeNotFound { src: RouterId, dst: RouterId },
}

/// Weighted directed graph of routers.
///
/// At most one link per ordered router pair; upserting an existing pair
/// overwrites its weight. Every link endpoint is a member of the node set,
/// and removing a link never removes its (possibly now isolated) endpoints.
///
/// All mutations are local to the instance. Snapshots are plain `Clone`s;
/// queries against different snapshots are independent of each other.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RawNetworkGraph")]
pub struct NetworkGraph {
    nodes: BTreeSet<RouterId>,
    links: BTreeMap<RouterId, BTreeMap<RouterId, Weight>>,
}

/// Deserialization mirror of `NetworkGraph`. A hand-written document may
/// reference link endpoints it never lists under `nodes`; converting through
/// this type inserts them, the same way `upsert_edge` does, so a
/// deserialized graph always satisfies the endpoint invariant.
#[derive(Deserialize)]
struct RawNetworkGraph {
    nodes: BTreeSet<RouterId>,
    links: BTreeMap<RouterId, BTreeMap<RouterId, Weight>>,
}

impl From<RawNetworkGraph> for NetworkGraph {
    fn from(raw: RawNetworkGraph) -> Self {
        let mut nodes = raw.nodes;
        for (source, out) in &raw.links {
            nodes.insert(source.clone());
            for destination in out.keys() {
                nodes.insert(destination.clone());
            }
        }
        NetworkGraph { nodes, links: raw.links }
    }
}

impl NetworkGraph {
    pub fn new() -> Self {
        NetworkGraph::default()
    }

    /// Builds a graph from ingested link records, enforcing the non-negative
    /// weight policy on every record.
    pub fn from_records<I>(records: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut graph = NetworkGraph::new();
        for record in records {
            graph.upsert_edge(&record.source, &record.destination, record.weight)?;
        }
        Ok(graph)
    }

    /// Inserts or overwrites the link `source -> destination`. Absent
    /// endpoints are added to the node set.
    ///
    /// Rejects negative weights with `InvalidWeight`; this is the ingestion
    /// policy, not a property of the weight type.
    pub fn upsert_edge(
        &mut self,
        source: &str,
        destination: &str,
        weight: Weight,
    ) -> Result<(), GraphError> {
        if weight < 0 {
            return Err(GraphError::InvalidWeight {
                src: source.to_string(),
                dst: destination.to_string(),
                weight,
            });
        }
        self.nodes.insert(source.to_string());
        self.nodes.insert(destination.to_string());
        self.links
            .entry(source.to_string())
            .or_default()
            .insert(destination.to_string(), weight);
        Ok(())
    }

    /// Overwrites the weight of an *existing* link, bypassing the ingestion
    /// bound. This is the event simulator's reweight hook and the only
    /// deliberate way negative weights enter a snapshot.
    pub fn assign_weight(
        &mut self,
        source: &str,
        destination: &str,
        weight: Weight,
    ) -> Result<(), GraphError> {
        match self.links.get_mut(source).and_then(|out| out.get_mut(destination)) {
            Some(slot) => {
                *slot = weight;
                Ok(())
            }
            None => Err(GraphError::EdgeNotFound {
                src: source.to_string(),
                dst: destination.to_string(),
            }),
        }
    }

    /// Removes the link `source -> destination`. Returns `EdgeNotFound` if it
    /// does not exist. Endpoints stay in the node set even when isolated.
    pub fn remove_edge(&mut self, source: &str, destination: &str) -> Result<(), GraphError> {
        match self.links.get_mut(source).and_then(|out| out.remove(destination)) {
            Some(_) => Ok(()),
            None => Err(GraphError::EdgeNotFound {
                src: source.to_string(),
                dst: destination.to_string(),
            }),
        }
    }

    pub fn contains_node(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    /// Weight of the link `source -> destination`, if present.
    pub fn weight(&self, source: &str, destination: &str) -> Option<Weight> {
        self.links.get(source).and_then(|out| out.get(destination)).copied()
    }

    /// Outgoing links of `node` as `(neighbor, weight)` pairs, in
    /// lexicographic neighbor order. Empty for sink or unknown nodes.
    pub fn neighbors<'a>(&'a self, node: &str) -> impl Iterator<Item = (&'a RouterId, Weight)> + use<'a> {
        self.links
            .get(node)
            .into_iter()
            .flatten()
            .map(|(neighbor, weight)| (neighbor, *weight))
    }

    /// All routers, in lexicographic order.
    pub fn nodes(&self) -> impl Iterator<Item = &RouterId> {
        self.nodes.iter()
    }

    /// All links as owned records, ordered by (source, destination).
    pub fn edges(&self) -> impl Iterator<Item = EdgeRecord> + '_ {
        self.links.iter().flat_map(|(source, out)| {
            out.iter().map(|(destination, weight)| EdgeRecord {
                source: source.clone(),
                destination: destination.clone(),
                weight: *weight,
            })
        })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.links.values().map(BTreeMap::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NetworkGraph {
        NetworkGraph::from_records([
            ("R1", "R2", 4).into(),
            ("R2", "R3", 1).into(),
            ("R1", "R3", 10).into(),
        ])
        .unwrap()
    }

    #[test]
    fn upsert_overwrites_existing_weight() {
        let mut graph = sample();
        graph.upsert_edge("R1", "R2", 7).unwrap();
        assert_eq!(graph.weight("R1", "R2"), Some(7));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn upsert_rejects_negative_weight() {
        let mut graph = NetworkGraph::new();
        let err = graph.upsert_edge("A", "B", -1).unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { weight: -1, .. }));
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn edges_are_directed() {
        let graph = sample();
        assert_eq!(graph.weight("R1", "R2"), Some(4));
        assert_eq!(graph.weight("R2", "R1"), None);
    }

    #[test]
    fn remove_edge_keeps_isolated_nodes() {
        let mut graph = sample();
        graph.remove_edge("R2", "R3").unwrap();
        assert!(graph.contains_node("R2"));
        assert!(graph.contains_node("R3"));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn remove_missing_edge_is_reported() {
        let mut graph = sample();
        let err = graph.remove_edge("R3", "R1").unwrap_err();
        assert!(matches!(err, GraphError::EdgeNotFound { .. }));
    }

    #[test]
    fn assign_weight_requires_existing_edge() {
        let mut graph = sample();
        assert!(graph.assign_weight("R3", "R1", 5).is_err());
        // Bypasses the ingestion bound for existing links.
        graph.assign_weight("R2", "R3", -3).unwrap();
        assert_eq!(graph.weight("R2", "R3"), Some(-3));
    }

    #[test]
    fn neighbors_in_lexicographic_order() {
        let graph = sample();
        let out: Vec<_> = graph
            .neighbors("R1")
            .map(|(n, w)| (n.as_str(), w))
            .collect();
        assert_eq!(out, vec![("R2", 4), ("R3", 10)]);
        assert_eq!(graph.neighbors("R3").count(), 0);
        assert_eq!(graph.neighbors("absent").count(), 0);
    }

    #[test]
    fn error_messages_name_both_endpoints() {
        use std::error::Error;

        let mut graph = NetworkGraph::new();
        let err = graph.upsert_edge("A", "B", -1).unwrap_err();
        assert_eq!(err.to_string(), "negative weight -1 on link A -> B");
        // The endpoint labels are plain data, not a chained error cause.
        assert!(err.source().is_none());

        let err = graph.remove_edge("B", "A").unwrap_err();
        assert_eq!(err.to_string(), "no link B -> A");
        assert!(err.source().is_none());
    }

    #[test]
    fn deserialization_inserts_unlisted_link_endpoints() {
        let json = r#"{"nodes": ["R1"], "links": {"R1": {"R2": 3}, "R3": {"R1": 1}}}"#;

        let graph: NetworkGraph = serde_json::from_str(json).unwrap();

        let nodes: Vec<_> = graph.nodes().map(String::as_str).collect();
        assert_eq!(nodes, vec!["R1", "R2", "R3"]);
        assert_eq!(graph.weight("R1", "R2"), Some(3));
        assert_eq!(graph.weight("R3", "R1"), Some(1));
        // The repaired node set feeds the routing table too.
        let rows = crate::routing::build_table(&graph, "R3").unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_graph_deserialization() {
        let json = include_str!("../../test_data/test_graph.json");

        let graph: NetworkGraph = serde_json::from_str(json).unwrap();

        let nodes: Vec<_> = graph.nodes().map(String::as_str).collect();
        assert_eq!(nodes, vec!["R1", "R2", "R3", "R4"]);
        assert_eq!(graph.weight("R1", "R2"), Some(4));
        assert_eq!(graph.weight("R2", "R3"), Some(1));
        assert_eq!(graph.weight("R1", "R3"), Some(10));
        // R4 is isolated: present in the node set, no links either way.
        assert_eq!(graph.neighbors("R4").count(), 0);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn graph_serialization_round_trip() {
        let graph = sample();
        let json = serde_json::to_string(&graph).unwrap();
        let restored: NetworkGraph = serde_json::from_str(&json).unwrap();
        let original: Vec<_> = graph.edges().collect();
        let round_tripped: Vec<_> = restored.edges().collect();
        assert_eq!(original, round_tripped);
    }
}
