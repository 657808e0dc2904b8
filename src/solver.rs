//! Route planning pipeline.
//!
//! Boundary checks, nearest-neighbor construction, 2-opt refinement, and
//! statistics in one call. The stages are also usable on their own from
//! [`construct`](crate::construct), [`two_opt`](crate::two_opt),
//! [`stats`](crate::stats) and [`insert`](crate::insert).

use std::collections::HashSet;

use crate::construct::nearest_neighbor;
use crate::haversine::path_miles;
use crate::insert::insert_stop;
use crate::model::{Point, TransportMode};
use crate::stats::{RouteStats, TransportPolicy, compute_stats_with};
use crate::traits::Stop;
use crate::two_opt::{DEFAULT_MAX_ITERATIONS, refine_from};

#[derive(Debug, Clone)]
pub struct SolveOptions {
    /// Largest accepted stop count. Construction and insertion are O(n²).
    pub max_stops: usize,
    /// Maximum improving 2-opt moves; each move restarts the scan.
    pub local_search_iterations: usize,
    /// Skip 2-opt entirely when false.
    pub refine: bool,
    pub policy: TransportPolicy,
}

impl Default for SolveOptions {
    fn default() -> Self {
        Self {
            max_stops: 50,
            local_search_iterations: DEFAULT_MAX_ITERATIONS,
            refine: true,
            policy: TransportPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolveError {
    #[error("route has {count} stops, limit is {max}")]
    TooManyStops { count: usize, max: usize },
    #[error("start point has a non-finite coordinate")]
    NonFiniteStart,
    #[error("stop {index} has a non-finite coordinate")]
    NonFiniteCoordinate { index: usize },
    #[error("stop {index} repeats an earlier stop id")]
    DuplicateStopId { index: usize },
}

#[derive(Debug, Clone)]
pub struct SolvedRoute<S> {
    /// Stops in visiting order.
    pub stops: Vec<S>,
    pub stats: RouteStats,
    /// Path length before the final optimization step: the constructed
    /// order for [`solve`], the existing route for [`add_stop`].
    pub baseline_distance_miles: f64,
}

/// Orders `stops` starting from `start` and reports trip statistics.
pub fn solve<S>(
    start: Point,
    stops: &[S],
    mode: TransportMode,
    options: &SolveOptions,
) -> Result<SolvedRoute<S>, SolveError>
where
    S: Stop + Clone,
{
    validate(start, stops, options)?;

    let constructed = nearest_neighbor(start, stops);
    let baseline_distance_miles = path_miles(start, &constructed);

    let route = if options.refine {
        refine_from(start, &constructed, options.local_search_iterations)
    } else {
        constructed
    };

    let stats = compute_stats_with(start, &route, mode, &options.policy);
    tracing::debug!(
        stops = stats.stop_count,
        constructed_miles = baseline_distance_miles,
        refined_miles = stats.total_distance_miles,
        ?mode,
        "route solved"
    );

    Ok(SolvedRoute {
        stops: route,
        stats,
        baseline_distance_miles,
    })
}

/// Adds one stop to an existing route at its cheapest position.
///
/// The existing order is kept; no reconstruction or refinement is run.
pub fn add_stop<S>(
    start: Point,
    route: &[S],
    new_stop: S,
    mode: TransportMode,
    options: &SolveOptions,
) -> Result<SolvedRoute<S>, SolveError>
where
    S: Stop + Clone,
{
    let mut candidate = route.to_vec();
    candidate.push(new_stop.clone());
    validate(start, &candidate, options)?;

    let baseline_distance_miles = path_miles(start, route);
    let updated = insert_stop(start, route, new_stop);
    let stats = compute_stats_with(start, &updated, mode, &options.policy);
    tracing::debug!(
        stops = stats.stop_count,
        added_miles = stats.total_distance_miles - baseline_distance_miles,
        "stop inserted"
    );

    Ok(SolvedRoute {
        stops: updated,
        stats,
        baseline_distance_miles,
    })
}

/// Checks the preconditions the optimizer itself does not enforce.
///
/// Only the stop limit is a planner error. The coordinate and id checks
/// stand in for the ingestion boundary (geocoder, store manager) so bad
/// input is rejected here instead of producing non-finite distances.
fn validate<S: Stop>(start: Point, stops: &[S], options: &SolveOptions) -> Result<(), SolveError> {
    if stops.len() > options.max_stops {
        return Err(SolveError::TooManyStops {
            count: stops.len(),
            max: options.max_stops,
        });
    }

    if !start.is_finite() {
        return Err(SolveError::NonFiniteStart);
    }

    let mut seen = HashSet::with_capacity(stops.len());
    for (index, stop) in stops.iter().enumerate() {
        if !stop.location().is_finite() {
            return Err(SolveError::NonFiniteCoordinate { index });
        }
        if !seen.insert(stop.id()) {
            return Err(SolveError::DuplicateStopId { index });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Waypoint;

    fn grid(n: usize) -> Vec<Waypoint> {
        (0..n)
            .map(|k| Waypoint::new(format!("s{k}"), (0.001 * (k / 5) as f64, 0.001 * (k % 5) as f64)))
            .collect()
    }

    #[test]
    fn test_too_many_stops() {
        let options = SolveOptions::default();
        let err = solve(Point::new(0.0, 0.0), &grid(51), TransportMode::Walking, &options)
            .unwrap_err();
        assert_eq!(err, SolveError::TooManyStops { count: 51, max: 50 });
        assert_eq!(err.to_string(), "route has 51 stops, limit is 50");
    }

    #[test]
    fn test_at_limit_is_accepted() {
        let options = SolveOptions::default();
        let solved = solve(Point::new(0.0, 0.0), &grid(50), TransportMode::Walking, &options).unwrap();
        assert_eq!(solved.stops.len(), 50);
    }

    #[test]
    fn test_rejects_non_finite() {
        let options = SolveOptions::default();
        let stops = vec![
            Waypoint::new("a", (0.0, 0.01)),
            Waypoint::new("b", (f64::NAN, 0.02)),
        ];
        let err = solve(Point::new(0.0, 0.0), &stops, TransportMode::Walking, &options).unwrap_err();
        assert_eq!(err, SolveError::NonFiniteCoordinate { index: 1 });

        let err = solve(Point::new(f64::INFINITY, 0.0), &grid(2), TransportMode::Walking, &options)
            .unwrap_err();
        assert_eq!(err, SolveError::NonFiniteStart);
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let options = SolveOptions::default();
        let stops = vec![
            Waypoint::new("a", (0.0, 0.01)),
            Waypoint::new("b", (0.0, 0.02)),
            Waypoint::new("a", (0.0, 0.03)),
        ];
        let err = solve(Point::new(0.0, 0.0), &stops, TransportMode::Walking, &options).unwrap_err();
        assert_eq!(err, SolveError::DuplicateStopId { index: 2 });
    }

    #[test]
    fn test_add_stop_respects_limit() {
        let options = SolveOptions {
            max_stops: 3,
            ..SolveOptions::default()
        };
        let route = grid(3);
        let err = add_stop(
            Point::new(0.0, 0.0),
            &route,
            Waypoint::new("extra", (0.0, 0.5)),
            TransportMode::Walking,
            &options,
        )
        .unwrap_err();
        assert_eq!(err, SolveError::TooManyStops { count: 4, max: 3 });
    }

    #[test]
    fn test_add_stop_rejects_existing_id() {
        let route = grid(3);
        let err = add_stop(
            Point::new(0.0, 0.0),
            &route,
            Waypoint::new("s1", (0.0, 0.5)),
            TransportMode::Walking,
            &SolveOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, SolveError::DuplicateStopId { index: 3 });
    }

    #[test]
    fn test_refine_disabled_returns_constructed_order() {
        let options = SolveOptions {
            refine: false,
            ..SolveOptions::default()
        };
        let start = Point::new(0.0, 0.0);
        let stops = grid(12);
        let solved = solve(start, &stops, TransportMode::Walking, &options).unwrap();
        assert_eq!(solved.stops, nearest_neighbor(start, &stops));
        assert!((solved.stats.total_distance_miles - solved.baseline_distance_miles).abs() < 1e-12);
    }
}
