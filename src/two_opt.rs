//! Bounded 2-opt refinement over an open path.
//!
//! # Algorithm
//!
//! For each pair of positions `i < j` compare edges `(i, i+1)` and `(j, j+1)`
//! against `(i, j)` and `(i+1, j+1)`. When the replacement is shorter,
//! reverse the segment `[i+1..=j]` and rescan from the top.
//!
//! ```text
//! delta = d(p[i], p[j]) + d(p[i+1], p[j+1]) - d(p[i], p[i+1]) - d(p[j], p[j+1])
//! ```
//!
//! The path is open: the last position has no outgoing edge, so when `j` is
//! the last position the `(j, j+1)` and `(i+1, j+1)` terms are dropped rather
//! than wrapping to the first stop.
//!
//! # Complexity
//!
//! O(n²) per scan. `max_iterations` caps the number of improving moves;
//! each move is followed by a fresh scan from the top.

use crate::haversine::distance_miles;
use crate::model::Point;
use crate::traits::Stop;

/// Default cap on improving moves.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Minimum gain (miles) for a move to count as an improvement.
const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Shortest route that admits a non-trivial 2-opt move.
const MIN_REFINE_LEN: usize = 4;

/// Refines the visiting order, keeping the first stop in place.
///
/// Applies at most `max_iterations` improving moves. Routes shorter than
/// four stops come back unchanged.
pub fn refine<S: Stop + Clone>(route: &[S], max_iterations: usize) -> Vec<S> {
    let mut working = route.to_vec();
    if working.len() >= MIN_REFINE_LEN {
        improve(None, &mut working, max_iterations);
    }
    working
}

/// Refines the path `start -> route[0] -> ...`, letting every stop move.
///
/// Applies at most `max_iterations` improving moves. The length being
/// reduced is the same one route statistics report.
pub fn refine_from<S: Stop + Clone>(start: Point, route: &[S], max_iterations: usize) -> Vec<S> {
    let mut working = route.to_vec();
    if working.len() >= MIN_REFINE_LEN {
        improve(Some(start), &mut working, max_iterations);
    }
    working
}

/// Positions of the path: an optional fixed anchor followed by the stops.
struct OpenPath<'a, S> {
    anchor: Option<Point>,
    stops: &'a mut [S],
}

impl<S: Stop> OpenPath<'_, S> {
    fn offset(&self) -> usize {
        usize::from(self.anchor.is_some())
    }

    fn len(&self) -> usize {
        self.stops.len() + self.offset()
    }

    fn at(&self, position: usize) -> Point {
        match self.anchor {
            Some(anchor) if position == 0 => anchor,
            _ => self.stops[position - self.offset()].location(),
        }
    }

    fn edge(&self, from: usize, to: usize) -> f64 {
        distance_miles(self.at(from), self.at(to))
    }

    /// Length change from reversing positions `[i+1..=j]`.
    fn delta(&self, i: usize, j: usize) -> f64 {
        let removed_head = self.edge(i, i + 1);
        let added_head = self.edge(i, j);
        if j + 1 == self.len() {
            return added_head - removed_head;
        }
        added_head + self.edge(i + 1, j + 1) - removed_head - self.edge(j, j + 1)
    }

    fn first_improving_move(&self) -> Option<(usize, usize, f64)> {
        let n = self.len();
        for i in 0..n.saturating_sub(2) {
            for j in i + 2..n {
                let delta = self.delta(i, j);
                if delta < -IMPROVEMENT_EPSILON {
                    return Some((i, j, delta));
                }
            }
        }
        None
    }

    fn reverse(&mut self, i: usize, j: usize) {
        let offset = self.offset();
        self.stops[i + 1 - offset..=j - offset].reverse();
    }
}

fn improve<S: Stop>(anchor: Option<Point>, stops: &mut [S], max_iterations: usize) {
    let mut path = OpenPath { anchor, stops };

    for iteration in 0..max_iterations {
        let Some((i, j, delta)) = path.first_improving_move() else {
            tracing::trace!(iteration, "2-opt converged");
            return;
        };
        tracing::trace!(iteration, i, j, delta, "2-opt reversal applied");
        path.reverse(i, j);
    }

    if max_iterations > 0 {
        tracing::warn!(max_iterations, "2-opt stopped at move cap");
    }
}
