/*!
Network module

This module holds the in-memory representation of a routed network: routers
identified by opaque string labels, connected by directed weighted links.

This module defines:
- `NetworkGraph`: the graph store (node set + adjacency map, all mutations
  local to the instance).
- `EdgeRecord`: one link record (source, destination, weight).
- `GraphError`: store-level error type.

Re-exports the store types for easy consumption by callers.
*/

pub mod edge;
pub mod graph;

pub use edge::EdgeRecord;
pub use graph::{GraphError, NetworkGraph, RouterId, Weight};
