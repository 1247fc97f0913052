//! Random relocation kicks for iterated local search.

use rand::Rng;

use super::moves::{apply, Move};
use crate::evaluation::fits;
use crate::models::{Instance, Solution};

/// Attempts per requested kick before giving up on finding a feasible one.
const ATTEMPTS_PER_KICK: usize = 8;

/// Applies up to `strength` random capacity-feasible relocations and
/// returns how many were applied. `strength` is capped at the number of
/// served customers.
///
/// Kicks ignore cost, so the result is usually worse than the input. The
/// caller descends from it and decides whether to keep it.
pub fn kick<R: Rng>(
    solution: &mut Solution,
    instance: &Instance,
    strength: usize,
    rng: &mut R,
) -> usize {
    let num_routes = solution.num_routes();
    if num_routes == 0 || solution.num_served() == 0 {
        return 0;
    }

    let capacity = instance.capacity();
    let strength = strength.min(solution.num_served());
    let max_attempts = strength.saturating_mul(ATTEMPTS_PER_KICK);
    let mut applied = 0;
    let mut attempts = 0;

    while applied < strength && attempts < max_attempts {
        attempts += 1;

        let from_route = rng.random_range(0..num_routes);
        let source = solution.route(from_route);
        if source.is_empty() {
            continue;
        }
        let from_pos = rng.random_range(0..source.len());
        let customer = source.customers()[from_pos];

        let to_route = rng.random_range(0..num_routes);
        let target = solution.route(to_route);
        let to_pos = if to_route == from_route {
            // slots of the route with the customer removed
            rng.random_range(0..source.len())
        } else {
            if !fits(target.load(), instance.demand(customer), capacity) {
                continue;
            }
            rng.random_range(0..=target.len())
        };

        apply(
            Move::Relocate {
                from_route,
                from_pos,
                to_route,
                to_pos,
            },
            solution,
            instance,
        );
        applied += 1;
    }

    applied
}
