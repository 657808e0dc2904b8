//! Test fixtures for route-optimizer.
//!
//! Provides realistic test data:
//! - Real Manhattan landmarks and storefront corners (from OpenStreetMap)

pub mod manhattan_locations;
