//! Great-circle distance in miles.
//!
//! Straight-line geo distance; ignores roads and transit lines. Accurate to
//! well under 0.1% at metropolitan scale.

use crate::model::Point;
use crate::traits::Stop;

/// Mean Earth radius in miles.
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Haversine distance between two points in miles.
///
/// Symmetric and non-negative. Inputs must be finite; this is not checked.
pub fn distance_miles(from: Point, to: Point) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    // Clamp guards asin against a rounding a hair above 1.0 for antipodes.
    let c = 2.0 * a.sqrt().min(1.0).asin();

    EARTH_RADIUS_MILES * c
}

/// Length of the open path `start -> route[0] -> ... -> route[n-1]`.
pub fn path_miles<S: Stop>(start: Point, route: &[S]) -> f64 {
    let mut total = 0.0;
    let mut prev = start;
    for stop in route {
        let location = stop.location();
        total += distance_miles(prev, location);
        prev = location;
    }
    total
}

/// Length of the open path through the stops alone, first stop to last.
pub fn route_miles<S: Stop>(route: &[S]) -> f64 {
    route
        .windows(2)
        .map(|pair| distance_miles(pair[0].location(), pair[1].location()))
        .sum()
}
