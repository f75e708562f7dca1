/*!
Routing-table builder.

One table per (snapshot, source router): the least-cost path and cost to
every other router, computed from a single Dijkstra pass. The table assumes
the usual non-negative weights of an ingested snapshot.

This module defines:
- `TableEntry`: a concrete route, or the unreachable (infinite cost) marker.
- `RoutingTableRow`: destination plus its entry.
- `build_table`: the builder itself.
*/

use serde::{Deserialize, Serialize};

use crate::network::{NetworkGraph, RouterId, Weight};
use crate::routing::dijkstra;
use crate::routing::path::RouteError;

/// Route to one destination. `Unreachable` stands for infinite cost and the
/// "no path" marker in rendered tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TableEntry {
    Route { cost: Weight, path: Vec<RouterId> },
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingTableRow {
    pub destination: RouterId,
    pub entry: TableEntry,
}

/// Builds the routing table for `source`: one row per other router in the
/// snapshot, in lexicographic destination order (the store's node order).
///
/// Fails with `NodeNotFound` if `source` is not part of the snapshot. Rows
/// only depend on the snapshot, so rebuilding over an unmutated snapshot
/// yields identical rows.
pub fn build_table(
    graph: &NetworkGraph,
    source: &str,
) -> Result<Vec<RoutingTableRow>, RouteError> {
    if !graph.contains_node(source) {
        return Err(RouteError::NodeNotFound(source.to_string()));
    }

    let tree = dijkstra::single_source(graph, source);
    let rows = graph
        .nodes()
        .filter(|destination| destination.as_str() != source)
        .map(|destination| {
            let entry = match tree.path_to(source, destination) {
                Some(path) => TableEntry::Route {
                    cost: tree.dist[destination],
                    path,
                },
                None => TableEntry::Unreachable,
            };
            RoutingTableRow {
                destination: destination.clone(),
                entry,
            }
        })
        .collect();
    Ok(rows)
}
