//! route-optimizer core
//!
//! Orders a set of stops from a starting point to approximately minimize
//! straight-line travel distance, refines the order with 2-opt, and reports
//! trip statistics per transport mode. Pure functions; no I/O, no shared
//! state.

pub mod traits;
pub mod model;
pub mod haversine;
pub mod construct;
pub mod two_opt;
pub mod stats;
pub mod insert;
pub mod polyline;
pub mod record;
pub mod solver;
