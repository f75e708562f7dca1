/*!
Bellman-Ford shortest paths.

Relaxes the snapshot's full edge list up to |V|-1 times, with an early exit
once a round changes nothing. Only distances reachable from the source
participate, so if a further relaxation is still possible after |V|-1 rounds
the snapshot contains a negative-weight cycle reachable from the source;
that is reported as `RouteError::NegativeCycle`, never as a silent wrong
answer or a bare "no path".

Unlike `dijkstra`, negative weights are tolerated, which makes this the
fallback engine for post-simulation snapshots whose weights are no longer
covered by the ingestion policy. Relaxation scans the lexicographically
ordered edge list with strict-improvement updates, so equal-cost path
selection is deterministic for a given snapshot.
*/

use std::collections::BTreeMap;
use std::time::Instant;

use crate::network::{EdgeRecord, NetworkGraph, RouterId, Weight};
use crate::routing::path::{PathResult, QueryOutcome, RouteError, check_endpoints, reconstruct_path};

/// Least-cost path from `source` to `target`, with the elapsed wall-clock
/// time of this one computation.
pub fn shortest_path(graph: &NetworkGraph, source: &str, target: &str) -> QueryOutcome {
    check_endpoints(graph, source, target)?;

    let start = Instant::now();
    let edges: Vec<EdgeRecord> = graph.edges().collect();
    let mut dist: BTreeMap<RouterId, Weight> = BTreeMap::new();
    let mut prev: BTreeMap<RouterId, RouterId> = BTreeMap::new();
    dist.insert(source.to_string(), 0);

    let rounds = graph.node_count().saturating_sub(1);
    let mut changed = false;
    for _ in 0..rounds {
        changed = false;
        for edge in &edges {
            if let Some(improved) = relax(&dist, edge) {
                dist.insert(edge.destination.clone(), improved);
                prev.insert(edge.destination.clone(), edge.source.clone());
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    // A full last round still relaxing means a reachable negative cycle:
    // every distance upstream of it is unbounded below.
    if changed && edges.iter().any(|edge| relax(&dist, edge).is_some()) {
        return Err(RouteError::NegativeCycle(source.to_string()));
    }

    let result = match reconstruct_path(&prev, source, target, dist.contains_key(target)) {
        Some(path) => PathResult::Found {
            total_cost: dist[target],
            path,
            elapsed: start.elapsed(),
        },
        None => PathResult::NotFound,
    };
    Ok(result)
}

/// Improved distance for the edge's destination, if this edge relaxes it.
fn relax(dist: &BTreeMap<RouterId, Weight>, edge: &EdgeRecord) -> Option<Weight> {
    let candidate = dist.get(&edge.source)? + edge.weight;
    match dist.get(&edge.destination) {
        Some(&best) if candidate >= best => None,
        _ => Some(candidate),
    }
}
