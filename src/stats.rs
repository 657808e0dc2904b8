//! Trip statistics under a transport-mode policy.

use serde::{Deserialize, Serialize};

use crate::haversine::distance_miles;
use crate::model::{Point, TransportMode};
use crate::traits::Stop;

/// Average walking speed assumption for time estimation.
const DEFAULT_WALKING_SPEED_MPH: f64 = 3.0;

/// Single-ride subway fare.
const DEFAULT_SUBWAY_FARE_USD: f64 = 2.90;

/// Time and cost parameters for each transport mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportPolicy {
    pub walking_speed_mph: f64,
    pub subway_fare_usd: f64,
    /// Flat subway allowance per stop in `Subway` mode.
    pub subway_minutes_per_stop: f64,
    /// Fixed buffer added once in `Subway` mode.
    pub subway_buffer_minutes: f64,
    /// In `Mixed` mode, segments shorter than this are walked.
    pub mixed_walk_threshold_miles: f64,
    /// In `Mixed` mode, flat allowance for a segment taken by subway.
    pub mixed_subway_minutes: f64,
}

impl Default for TransportPolicy {
    fn default() -> Self {
        Self {
            walking_speed_mph: DEFAULT_WALKING_SPEED_MPH,
            subway_fare_usd: DEFAULT_SUBWAY_FARE_USD,
            subway_minutes_per_stop: 15.0,
            subway_buffer_minutes: 20.0,
            mixed_walk_threshold_miles: 0.5,
            mixed_subway_minutes: 15.0,
        }
    }
}

impl TransportPolicy {
    fn walking_minutes(&self, miles: f64) -> f64 {
        miles / self.walking_speed_mph * 60.0
    }
}

/// Totals for one route. Time is rounded to whole minutes, cost to cents.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStats {
    pub total_distance_miles: f64,
    pub total_time_minutes: f64,
    #[serde(rename = "totalCostUSD")]
    pub total_cost_usd: f64,
    pub stop_count: usize,
}

/// Computes statistics for `start -> route[0] -> ... -> route[n-1]` with the
/// default policy.
pub fn compute_stats<S: Stop>(start: Point, route: &[S], mode: TransportMode) -> RouteStats {
    compute_stats_with(start, route, mode, &TransportPolicy::default())
}

/// Computes statistics with an explicit policy.
pub fn compute_stats_with<S: Stop>(
    start: Point,
    route: &[S],
    mode: TransportMode,
    policy: &TransportPolicy,
) -> RouteStats {
    if route.is_empty() {
        return RouteStats::default();
    }

    let mut segments = Vec::with_capacity(route.len());
    let mut prev = start;
    for stop in route {
        let location = stop.location();
        segments.push(distance_miles(prev, location));
        prev = location;
    }

    let stop_count = route.len();
    let total_distance_miles: f64 = segments.iter().sum();

    let (minutes, cost) = match mode {
        TransportMode::Walking => (policy.walking_minutes(total_distance_miles), 0.0),
        TransportMode::Subway => (
            stop_count as f64 * policy.subway_minutes_per_stop + policy.subway_buffer_minutes,
            (stop_count + 1) as f64 * policy.subway_fare_usd,
        ),
        TransportMode::Mixed => segments.iter().fold((0.0, 0.0), |(minutes, cost), &miles| {
            if miles < policy.mixed_walk_threshold_miles {
                (minutes + policy.walking_minutes(miles), cost)
            } else {
                (
                    minutes + policy.mixed_subway_minutes,
                    cost + policy.subway_fare_usd,
                )
            }
        }),
    };

    RouteStats {
        total_distance_miles,
        total_time_minutes: minutes.round(),
        total_cost_usd: round_cents(cost),
        stop_count,
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
