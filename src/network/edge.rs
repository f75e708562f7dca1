use serde::{Deserialize, Serialize};

use crate::network::graph::{RouterId, Weight};

/// One directed link record, as handed over by the ingestion layer and as
/// reported back by [`NetworkGraph::edges`](crate::network::NetworkGraph::edges).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: RouterId,
    pub destination: RouterId,
    pub weight: Weight,
}

impl EdgeRecord {
    pub fn new(source: impl Into<RouterId>, destination: impl Into<RouterId>, weight: Weight) -> Self {
        EdgeRecord {
            source: source.into(),
            destination: destination.into(),
            weight,
        }
    }
}

impl From<(&str, &str, Weight)> for EdgeRecord {
    fn from((source, destination, weight): (&str, &str, Weight)) -> Self {
        EdgeRecord::new(source, destination, weight)
    }
}
