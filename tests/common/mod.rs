//! Shared fixtures for integration tests.

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_cvrp::models::Location;

/// Lower Manhattan, used as the depot of every synthetic instance.
pub const DEPOT_COORDS: (f64, f64) = (40.7128, -74.0060);

/// Seeded customers scattered over the New York City area with demands
/// between 10 and 60.
pub fn synthetic_locations(seed: u64, customers: usize) -> Vec<Location> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut locations = Vec::with_capacity(customers + 1);
    locations.push(Location::depot("depot", DEPOT_COORDS.0, DEPOT_COORDS.1));
    for i in 1..=customers {
        locations.push(Location::new(
            i,
            format!("customer-{i}"),
            rng.random_range(40.6..40.8),
            rng.random_range(-74.1..-73.9),
            rng.random_range(10..=60),
        ));
    }
    locations
}

/// Customer indices served by `routes`, sorted.
pub fn served(routes: &[Vec<usize>]) -> Vec<usize> {
    let mut seen: Vec<usize> = routes
        .iter()
        .flat_map(|r| r.iter().copied().filter(|&i| i != 0))
        .collect();
    seen.sort_unstable();
    seen
}
