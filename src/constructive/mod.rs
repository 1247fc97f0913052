//! Constructive heuristics for building initial CVRP solutions.
//!
//! - [`cheapest_insertion()`]: cheapest feasible insertion across all routes,
//!   O(n³ × R)

mod cheapest_insertion;

pub use cheapest_insertion::{cheapest_insertion, check_capacity};
