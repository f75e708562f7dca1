/*!
PathSim core: a small packet-switched network modelled as a weighted
directed graph, with the routing questions asked over it.

Structure:
- `network`: the graph store (routers, directed weighted links).
- `simulation`: topology churn (random link failures and reweights).
- `routing`: Dijkstra and Bellman-Ford engines, the routing-table builder,
  and the algorithm comparison/recommendation logic.

Everything is synchronous and free of I/O; ingestion, rendering, and the
interactive shell live outside this crate and consume the structured types
re-exported below.
*/

pub mod network;
pub mod routing;
pub mod simulation;

pub use network::{EdgeRecord, GraphError, NetworkGraph, RouterId, Weight};
pub use routing::{
    Comparison, PathResult, QueryOutcome, Recommendation, RouteError, RouteFailure,
    RoutingTableRow, TableEntry, bellman_ford, build_table, compare, dijkstra, recommend,
};
pub use simulation::EventSimulator;
