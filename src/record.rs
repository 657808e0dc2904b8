//! Persisted form of a route: an ordered array of `{id, coordinates}`.

use serde::{Deserialize, Serialize};

use crate::model::Point;
use crate::traits::Stop;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopRecord<I> {
    pub id: I,
    pub coordinates: Point,
}

/// Converts a route into records, keeping visiting order.
pub fn to_records<S: Stop>(route: &[S]) -> Vec<StopRecord<S::Id>> {
    route
        .iter()
        .map(|stop| StopRecord {
            id: stop.id().clone(),
            coordinates: stop.location(),
        })
        .collect()
}
