/*!
Network event simulation.

Emulates topology churn: per link, a coin flip between link failure
(removal) and reweighting to a uniform draw from a configurable closed
range. The simulator never mutates its input; it returns a fresh snapshot,
and the caller decides whether to keep the prior one.

The randomness source is injected by the caller, never drawn from global
state, so simulation runs can be reproduced with a seeded generator.
*/

use std::ops::RangeInclusive;

use rand::Rng;

use crate::network::{EdgeRecord, NetworkGraph, Weight};

/// Default reweight range for churn events.
pub const DEFAULT_WEIGHT_RANGE: RangeInclusive<Weight> = 1..=20;

#[derive(Debug, Clone)]
pub struct EventSimulator {
    weight_range: RangeInclusive<Weight>,
}

impl Default for EventSimulator {
    fn default() -> Self {
        EventSimulator::new(DEFAULT_WEIGHT_RANGE)
    }
}

impl EventSimulator {
    pub fn new(weight_range: RangeInclusive<Weight>) -> Self {
        EventSimulator { weight_range }
    }

    /// Produces a churned copy of `graph`.
    ///
    /// The edge set is snapshotted up front, so links are considered exactly
    /// once per call. Each one is independently either removed or
    /// reweighted, with equal probability. The node set is untouched and no
    /// links are added.
    pub fn simulate<R: Rng>(&self, graph: &NetworkGraph, rng: &mut R) -> NetworkGraph {
        let mut churned = graph.clone();
        let original: Vec<EdgeRecord> = graph.edges().collect();
        for edge in original {
            // Each ordered pair occurs once in the original set, so neither
            // mutation can miss.
            if rng.random_bool(0.5) {
                churned
                    .remove_edge(&edge.source, &edge.destination)
                    .expect("link from the original snapshot");
            } else {
                let weight = rng.random_range(self.weight_range.clone());
                churned
                    .assign_weight(&edge.source, &edge.destination, weight)
                    .expect("link from the original snapshot");
            }
        }
        churned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> NetworkGraph {
        NetworkGraph::from_records([
            ("R1", "R2", 4).into(),
            ("R2", "R3", 1).into(),
            ("R1", "R3", 10).into(),
            ("R3", "R4", 2).into(),
            ("R4", "R1", 6).into(),
        ])
        .unwrap()
    }

    #[test]
    fn node_set_is_preserved() {
        let graph = sample();
        let mut rng = StdRng::seed_from_u64(7);
        let churned = EventSimulator::default().simulate(&graph, &mut rng);

        let before: Vec<_> = graph.nodes().collect();
        let after: Vec<_> = churned.nodes().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn no_links_are_added() {
        let graph = sample();
        let mut rng = StdRng::seed_from_u64(7);
        let churned = EventSimulator::default().simulate(&graph, &mut rng);

        assert!(churned.edge_count() <= graph.edge_count());
        for edge in churned.edges() {
            assert!(
                graph.weight(&edge.source, &edge.destination).is_some(),
                "link {} -> {} absent from the original",
                edge.source,
                edge.destination,
            );
        }
    }

    #[test]
    fn surviving_weights_fall_in_the_configured_range() {
        let graph = sample();
        let mut rng = StdRng::seed_from_u64(21);
        let simulator = EventSimulator::new(5..=8);
        let churned = simulator.simulate(&graph, &mut rng);

        for edge in churned.edges() {
            assert!((5..=8).contains(&edge.weight), "weight {} out of range", edge.weight);
        }
    }

    #[test]
    fn original_snapshot_is_untouched() {
        let graph = sample();
        let mut rng = StdRng::seed_from_u64(3);
        let _ = EventSimulator::default().simulate(&graph, &mut rng);
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph.weight("R1", "R3"), Some(10));
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let graph = sample();
        let simulator = EventSimulator::default();

        let first = simulator.simulate(&graph, &mut StdRng::seed_from_u64(42));
        let second = simulator.simulate(&graph, &mut StdRng::seed_from_u64(42));

        let a: Vec<_> = first.edges().collect();
        let b: Vec<_> = second.edges().collect();
        assert_eq!(a, b);
    }
}
