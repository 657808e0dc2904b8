//! Plain data types shared by every stage of the optimizer.

use serde::{Deserialize, Serialize};

use crate::traits::Stop;

/// A WGS84 coordinate in degrees.
///
/// No range check is done here; coordinates come from the geocoder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

/// Ready-made stop for callers without their own stop model.
///
/// `metadata` is never inspected by the optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint<M = ()> {
    pub id: String,
    pub location: Point,
    pub metadata: M,
}

impl Waypoint<()> {
    pub fn new(id: impl Into<String>, location: impl Into<Point>) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            metadata: (),
        }
    }
}

impl<M> Waypoint<M> {
    pub fn with_metadata(id: impl Into<String>, location: impl Into<Point>, metadata: M) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            metadata,
        }
    }
}

impl<M> Stop for Waypoint<M> {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn location(&self) -> Point {
        self.location
    }
}

/// Selects which time/cost model applies to route statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Walking,
    Subway,
    Mixed,
}
