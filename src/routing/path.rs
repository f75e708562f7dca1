/*!
Shared query types for the shortest-path engines.

This module defines:
- `PathResult`: outcome of one path computation (`Found`/`NotFound`).
- `RouteError`: query-level errors, distinct so the presentation layer can
  render a specific message instead of a generic "no path".
- `QueryOutcome`: convenience alias, what each engine returns.
*/

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network::{NetworkGraph, RouterId, Weight};

/// Query-level errors. Unreachable targets are not an error; they are
/// [`PathResult::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RouteError {
    #[error("router not found: {0}")]
    NodeNotFound(RouterId),
    #[error("source and destination are the same router: {0}")]
    SameEndpoint(RouterId),
    #[error("negative-weight cycle reachable from {0}")]
    NegativeCycle(RouterId),
}

/// Outcome of a single shortest-path computation.
///
/// `elapsed` is the wall-clock time of that one computation, carried for
/// algorithm comparison only; it never influences path selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PathResult {
    Found {
        path: Vec<RouterId>,
        total_cost: Weight,
        elapsed: Duration,
    },
    NotFound,
}

impl PathResult {
    pub fn path(&self) -> Option<&[RouterId]> {
        match self {
            PathResult::Found { path, .. } => Some(path),
            PathResult::NotFound => None,
        }
    }

    pub fn total_cost(&self) -> Option<Weight> {
        match self {
            PathResult::Found { total_cost, .. } => Some(*total_cost),
            PathResult::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found { .. })
    }
}

/// Convenience result alias for path queries.
pub type QueryOutcome = Result<PathResult, RouteError>;

/// Endpoint validation shared by both engines: endpoints must exist and must
/// differ. Runs before any algorithm work so a source==target query never
/// produces a trivial zero-cost path.
pub(crate) fn check_endpoints(
    graph: &NetworkGraph,
    source: &str,
    target: &str,
) -> Result<(), RouteError> {
    if !graph.contains_node(source) {
        return Err(RouteError::NodeNotFound(source.to_string()));
    }
    if !graph.contains_node(target) {
        return Err(RouteError::NodeNotFound(target.to_string()));
    }
    if source == target {
        return Err(RouteError::SameEndpoint(source.to_string()));
    }
    Ok(())
}

/// Walks predecessor links back from `target` and returns the forward path.
/// `None` when `target` was never reached.
pub(crate) fn reconstruct_path(
    prev: &std::collections::BTreeMap<RouterId, RouterId>,
    source: &str,
    target: &str,
    reached: bool,
) -> Option<Vec<RouterId>> {
    if !reached {
        return None;
    }
    let mut path = vec![target.to_string()];
    let mut current = target;
    while current != source {
        let parent = prev.get(current)?;
        path.push(parent.clone());
        current = parent;
    }
    path.reverse();
    Some(path)
}
