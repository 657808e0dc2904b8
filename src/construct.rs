//! Greedy nearest-neighbor route construction.
//!
//! O(n²) in the number of stops. Callers bound n (see
//! [`SolveOptions::max_stops`](crate::solver::SolveOptions)).

use crate::haversine::distance_miles;
use crate::model::Point;
use crate::traits::Stop;

/// Builds a visiting order by always stepping to the closest unvisited stop.
///
/// Among stops at the same minimum distance the one earliest in `stops`
/// wins, so the result depends only on the input order.
pub fn nearest_neighbor<S: Stop + Clone>(start: Point, stops: &[S]) -> Vec<S> {
    if stops.len() <= 1 {
        return stops.to_vec();
    }

    let mut visited = vec![false; stops.len()];
    let mut route = Vec::with_capacity(stops.len());
    let mut current = start;

    for _ in 0..stops.len() {
        let mut best: Option<(usize, f64)> = None;
        for (index, stop) in stops.iter().enumerate() {
            if visited[index] {
                continue;
            }
            let dist = distance_miles(current, stop.location());
            // Strict comparison keeps the earliest candidate on ties.
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((index, dist));
            }
        }

        let Some((index, _)) = best else {
            break;
        };
        visited[index] = true;
        current = stops[index].location();
        route.push(stops[index].clone());
    }

    route
}
