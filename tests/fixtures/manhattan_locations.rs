//! Real Manhattan locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap, rounded to four decimals
//! (about 10 meters), which is plenty for straight-line routing.

use route_optimizer::model::{Point, Waypoint};

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn point(&self) -> Point {
        Point::new(self.lat, self.lng)
    }

    pub fn waypoint(&self) -> Waypoint {
        Waypoint::new(self.name, self.point())
    }
}

// ============================================================================
// Transit Hubs (good for start locations)
// ============================================================================

pub const HUBS: &[Location] = &[
    Location::new("Times Square", 40.7580, -73.9855),
    Location::new("Grand Central Terminal", 40.7527, -73.9772),
    Location::new("Penn Station", 40.7506, -73.9935),
    Location::new("Union Square", 40.7359, -73.9911),
    Location::new("Columbus Circle", 40.7681, -73.9819),
];

// ============================================================================
// Midtown Candidate Sites
// ============================================================================

pub const MIDTOWN_SITES: &[Location] = &[
    Location::new("Bryant Park", 40.7536, -73.9832),
    Location::new("Herald Square", 40.7497, -73.9877),
    Location::new("Empire State Building", 40.7484, -73.9857),
    Location::new("Rockefeller Center", 40.7587, -73.9787),
    Location::new("MoMA", 40.7614, -73.9776),
    Location::new("Carnegie Hall", 40.7651, -73.9799),
    Location::new("Port Authority", 40.7570, -73.9903),
    Location::new("Madison Square Garden", 40.7505, -73.9934),
    Location::new("Hudson Yards", 40.7539, -74.0018),
    Location::new("Bloomingdale's", 40.7620, -73.9680),
];

// ============================================================================
// Downtown Candidate Sites
// ============================================================================

pub const DOWNTOWN_SITES: &[Location] = &[
    Location::new("Flatiron Building", 40.7411, -73.9897),
    Location::new("Madison Square Park", 40.7420, -73.9876),
    Location::new("Gramercy Park", 40.7382, -73.9860),
    Location::new("Chelsea Market", 40.7424, -74.0060),
    Location::new("Washington Square Park", 40.7308, -73.9973),
    Location::new("Astor Place", 40.7300, -73.9910),
    Location::new("Tompkins Square Park", 40.7265, -73.9815),
    Location::new("Prince Street", 40.7243, -73.9979),
    Location::new("Canal Street", 40.7191, -74.0010),
    Location::new("Tribeca", 40.7163, -74.0086),
    Location::new("City Hall Park", 40.7128, -74.0060),
    Location::new("Wall Street", 40.7060, -74.0088),
    Location::new("Battery Park", 40.7033, -74.0170),
];

// ============================================================================
// Uptown Candidate Sites
// ============================================================================

pub const UPTOWN_SITES: &[Location] = &[
    Location::new("Lincoln Center", 40.7725, -73.9835),
    Location::new("Central Park Zoo", 40.7678, -73.9718),
    Location::new("Upper West Side 72nd", 40.7781, -73.9819),
    Location::new("Museum of Natural History", 40.7813, -73.9740),
    Location::new("The Met", 40.7794, -73.9632),
];

/// Every candidate site, midtown first.
pub fn all_sites() -> Vec<Location> {
    MIDTOWN_SITES
        .iter()
        .chain(DOWNTOWN_SITES)
        .chain(UPTOWN_SITES)
        .cloned()
        .collect()
}
