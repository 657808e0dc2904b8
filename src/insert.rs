//! Cheapest insertion of one new stop into an existing route.
//!
//! Avoids a full reconstruction when a single stop is added. Each candidate
//! position is priced by the length it adds to the open path, which equals
//! the difference between the full path length with and without the stop.
//! For frequent insertions on long routes, rebuild with
//! [`nearest_neighbor`](crate::construct::nearest_neighbor) and
//! [`refine_from`](crate::two_opt::refine_from) instead.

use crate::haversine::distance_miles;
use crate::model::Point;
use crate::traits::Stop;

/// Returns the position in `0..=route.len()` where inserting `new_stop`
/// adds the least distance. The earliest position wins ties.
pub fn insertion_index<S: Stop, T: Stop>(start: Point, route: &[S], new_stop: &T) -> usize {
    let target = new_stop.location();
    let mut best_index = 0;
    let mut best_delta = f64::INFINITY;

    for index in 0..=route.len() {
        let prev = if index == 0 {
            start
        } else {
            route[index - 1].location()
        };
        let delta = match route.get(index) {
            Some(next) => {
                let next = next.location();
                distance_miles(prev, target) + distance_miles(target, next)
                    - distance_miles(prev, next)
            }
            // No outgoing edge after the last stop.
            None => distance_miles(prev, target),
        };

        if delta < best_delta {
            best_delta = delta;
            best_index = index;
        }
    }

    best_index
}

/// Returns a copy of `route` with `new_stop` placed at its cheapest position.
pub fn insert_stop<S: Stop + Clone>(start: Point, route: &[S], new_stop: S) -> Vec<S> {
    let index = insertion_index(start, route, &new_stop);
    let mut updated = Vec::with_capacity(route.len() + 1);
    updated.extend_from_slice(&route[..index]);
    updated.push(new_stop);
    updated.extend_from_slice(&route[index..]);
    updated
}
