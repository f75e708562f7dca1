/*!
Algorithm comparison and recommendation.

Runs Dijkstra and Bellman-Ford against the same snapshot and (source,
target) pair and recommends one based on the costs they found. The
recommendation itself is a pure, total function over the two outcomes: it
never errors, folding "both failed" into a reported failure instead.

Everything here is plain structured data for the presentation layer; elapsed
times ride along in the outcomes but never influence the recommendation.
*/

use serde::{Deserialize, Serialize};

use crate::network::{NetworkGraph, Weight};
use crate::routing::path::{PathResult, QueryOutcome, RouteError, check_endpoints};
use crate::routing::{bellman_ford, dijkstra};

/// Why no route could be recommended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteFailure {
    /// Neither algorithm found a path.
    Unreachable,
    /// Bellman-Ford detected a negative-weight cycle reachable from the
    /// source; costs through it are unbounded below.
    NegativeCycle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    UseDijkstra { cost: Weight },
    UseBellmanFord { cost: Weight },
    /// Both algorithms found routes of equal cost; either serves.
    Either { cost: Weight },
    NoRoute { failure: RouteFailure },
}

/// Both engines' outcomes for one query, plus the recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub dijkstra: QueryOutcome,
    pub bellman_ford: QueryOutcome,
    pub recommendation: Recommendation,
}

/// Picks an algorithm from the two outcomes of the same query.
///
/// Lower cost wins; equal costs recommend either; a single found path wins
/// by default. With no path at all the failure reason is `NegativeCycle`
/// when Bellman-Ford reported one, otherwise `Unreachable` (precondition
/// errors fold into `Unreachable` too; [`compare`] validates endpoints
/// before running either engine, so they do not normally reach this point).
pub fn recommend(dijkstra: &QueryOutcome, bellman_ford: &QueryOutcome) -> Recommendation {
    let found = |outcome: &QueryOutcome| match outcome {
        Ok(PathResult::Found { total_cost, .. }) => Some(*total_cost),
        _ => None,
    };

    match (found(dijkstra), found(bellman_ford)) {
        (Some(dj), Some(bf)) => {
            if dj < bf {
                Recommendation::UseDijkstra { cost: dj }
            } else if bf < dj {
                Recommendation::UseBellmanFord { cost: bf }
            } else {
                Recommendation::Either { cost: dj }
            }
        }
        (Some(dj), None) => Recommendation::UseDijkstra { cost: dj },
        (None, Some(bf)) => Recommendation::UseBellmanFord { cost: bf },
        (None, None) => {
            let failure = match bellman_ford {
                Err(RouteError::NegativeCycle(_)) => RouteFailure::NegativeCycle,
                _ => RouteFailure::Unreachable,
            };
            Recommendation::NoRoute { failure }
        }
    }
}

/// Runs both algorithms on the same snapshot and bundles their outcomes with
/// the recommendation.
pub fn compare(graph: &NetworkGraph, source: &str, target: &str) -> Result<Comparison, RouteError> {
    check_endpoints(graph, source, target)?;

    let dijkstra = dijkstra::shortest_path(graph, source, target);
    let bellman_ford = bellman_ford::shortest_path(graph, source, target);
    let recommendation = recommend(&dijkstra, &bellman_ford);
    Ok(Comparison {
        dijkstra,
        bellman_ford,
        recommendation,
    })
}
