/*!
Dijkstra shortest paths.

Greedy frontier expansion with a binary-heap priority queue keyed by
tentative distance. Heap entries order by `(cost, label)`, so equal-cost
frontiers pop in lexicographic label order; given the same snapshot the
result is always the same, which keeps equal-cost path selection
reproducible.

Precondition: every weight in the snapshot is non-negative. There is no
runtime guard; on a snapshot holding negative weights the answer is silently
wrong. The ingestion policy and the simulator's default reweight range keep
the precondition in normal operation, and `bellman_ford` is the engine to
use once it cannot be assumed.
*/

use std::cmp::Reverse;
use std::collections::{BTreeMap, BinaryHeap};
use std::time::Instant;

use crate::network::{NetworkGraph, RouterId, Weight};
use crate::routing::path::{PathResult, QueryOutcome, check_endpoints, reconstruct_path};

/// Distances and predecessor links from one source to every reachable node.
/// Nodes absent from `dist` are unreachable.
pub(crate) struct ShortestPathTree {
    pub dist: BTreeMap<RouterId, Weight>,
    pub prev: BTreeMap<RouterId, RouterId>,
}

impl ShortestPathTree {
    /// Forward path from the tree's source to `target`, if reached.
    pub fn path_to(&self, source: &str, target: &str) -> Option<Vec<RouterId>> {
        reconstruct_path(&self.prev, source, target, self.dist.contains_key(target))
    }
}

/// Single-source Dijkstra pass over the whole snapshot. Shared by the
/// single-pair query and the routing-table builder.
pub(crate) fn single_source(graph: &NetworkGraph, source: &str) -> ShortestPathTree {
    let mut dist: BTreeMap<RouterId, Weight> = BTreeMap::new();
    let mut prev: BTreeMap<RouterId, RouterId> = BTreeMap::new();
    let mut heap: BinaryHeap<Reverse<(Weight, RouterId)>> = BinaryHeap::new();

    dist.insert(source.to_string(), 0);
    heap.push(Reverse((0, source.to_string())));

    while let Some(Reverse((cost, node))) = heap.pop() {
        // Stale entry: a cheaper route to this node was already settled.
        if dist.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }
        for (neighbor, weight) in graph.neighbors(&node) {
            let candidate = cost + weight;
            let improves = dist.get(neighbor).is_none_or(|&best| candidate < best);
            if improves {
                dist.insert(neighbor.clone(), candidate);
                prev.insert(neighbor.clone(), node.clone());
                heap.push(Reverse((candidate, neighbor.clone())));
            }
        }
    }

    ShortestPathTree { dist, prev }
}

/// Least-cost path from `source` to `target`, with the elapsed wall-clock
/// time of this one computation.
pub fn shortest_path(graph: &NetworkGraph, source: &str, target: &str) -> QueryOutcome {
    check_endpoints(graph, source, target)?;

    let start = Instant::now();
    let tree = single_source(graph, source);
    let result = match tree.path_to(source, target) {
        Some(path) => PathResult::Found {
            total_cost: tree.dist[target],
            path,
            elapsed: start.elapsed(),
        },
        None => PathResult::NotFound,
    };
    Ok(result)
}
