/*!
Routing module

Path-finding over a [`NetworkGraph`](crate::network::NetworkGraph) snapshot.

Structure:
- `path`: shared query types (`PathResult`, `RouteError`, `QueryOutcome`).
- `dijkstra`: greedy frontier expansion, non-negative weights assumed.
- `bellman_ford`: edge relaxation, tolerates negative weights and reports
  reachable negative cycles.
- `table`: routing-table builder (least-cost path to every other router).
- `recommend`: runs both algorithms on one snapshot and picks one.

Re-exports the query and result types for easy consumption by callers.
*/

pub mod bellman_ford;
pub mod dijkstra;
pub mod path;
pub mod recommend;
pub mod table;

pub use path::{PathResult, QueryOutcome, RouteError};
pub use recommend::{Comparison, Recommendation, RouteFailure, compare, recommend};
pub use table::{RoutingTableRow, TableEntry, build_table};
