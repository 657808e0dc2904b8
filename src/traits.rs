//! Core domain traits for the route optimizer.
//!
//! These are intentionally minimal. Callers implement them for their own
//! stop models; any extra fields they carry are moved through untouched.

use std::hash::Hash;

use crate::model::Point;

/// Unique identifier for route entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A stop is a single destination to be visited.
pub trait Stop {
    type Id: Id;

    /// Caller-assigned id, unique within a route.
    fn id(&self) -> &Self::Id;

    /// Location coordinates (WGS84 degrees).
    fn location(&self) -> Point;
}
