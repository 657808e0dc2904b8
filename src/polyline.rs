//! Polyline representation for route geometries.
//!
//! The map renderer draws the route as straight segments from the start
//! through each stop in visiting order. Encoding to a compact polyline
//! string happens at the rendering boundary, not in the optimizer.

use serde::{Deserialize, Serialize};

use crate::haversine::distance_miles;
use crate::model::Point;
use crate::traits::Stop;

/// A polyline representing a route geometry as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Builds the geometry `start -> route[0] -> ... -> route[n-1]`.
    pub fn from_route<S: Stop>(start: Point, route: &[S]) -> Self {
        let points = std::iter::once(start)
            .chain(route.iter().map(|stop| stop.location()))
            .map(|point| (point.lat, point.lng))
            .collect();
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Straight-line length of the polyline in miles.
    pub fn length_miles(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| distance_miles(pair[0].into(), pair[1].into()))
            .sum()
    }
}
