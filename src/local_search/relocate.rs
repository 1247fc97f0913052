//! Customer relocation within or between routes.
//!
//! # Algorithm
//!
//! Tries moving each customer from its current position to every other
//! position of every route with enough spare capacity, including other
//! positions of its own route. The delta is the removal gain plus the
//! insertion cost:
//!
//! ```text
//! removal   = d(prev, next) - d(prev, c) - d(c, next)
//! insertion = d(prev', c) + d(c, next') - d(prev', next')
//! ```
//!
//! For an intra-route move, `prev'` and `next'` are taken from the route with
//! `c` already removed.
//!
//! # Complexity
//!
//! O(n²) per scan, where n = number of customers.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use super::moves::{consider, insertion_delta, slot_skipping, Candidate, Move};
use crate::evaluation::fits;
use crate::models::{Instance, Route, Solution};

/// Returns the most improving capacity-feasible relocation, if any.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::local_search::{best_relocate, Move};
/// use u_cvrp::models::{Fleet, Instance, Route, Solution};
///
/// // depot and three customers on a line, 1 unit apart
/// let dm = DistanceMatrix::from_data(
///     4,
///     vec![0, 1, 2, 3, 1, 0, 1, 2, 2, 1, 0, 1, 3, 2, 1, 0],
/// ).unwrap();
/// let instance = Instance::new(vec![0, 10, 10, 10], Fleet::new(2, 30), dm).unwrap();
///
/// // customer 2 rides alone although it lies between 1 and 3
/// let sol = Solution::from_routes(vec![
///     Route::from_customers(vec![1, 3], &instance),
///     Route::from_customers(vec![2], &instance),
/// ]);
/// let best = best_relocate(&sol, &instance).unwrap();
/// assert_eq!(best.delta, -4);
/// assert_eq!(
///     best.mv,
///     Move::Relocate { from_route: 1, from_pos: 0, to_route: 0, to_pos: 1 }
/// );
/// ```
pub fn best_relocate(solution: &Solution, instance: &Instance) -> Option<Candidate> {
    let mut best = None;
    scan(solution, instance, &mut best);
    best
}

pub(crate) fn scan(solution: &Solution, instance: &Instance, best: &mut Option<Candidate>) {
    let capacity = instance.capacity();
    let routes = solution.routes();

    for (from_route, source) in routes.iter().enumerate() {
        for from_pos in 0..source.len() {
            let customer = source.customers()[from_pos];
            let demand = instance.demand(customer);
            let removal = removal_delta(source, from_pos, instance);

            for (to_route, target) in routes.iter().enumerate() {
                if to_route == from_route {
                    // the shrunken route has len - 1 customers, len slots
                    for to_pos in (0..source.len()).filter(|&p| p != from_pos) {
                        let (prev, next) = slot_skipping(source, from_pos, to_pos);
                        let delta = removal + insertion_delta(prev, next, customer, instance);
                        consider(best, relocate(delta, from_route, from_pos, to_route, to_pos));
                    }
                    continue;
                }

                if !fits(target.load(), demand, capacity) {
                    continue;
                }
                for to_pos in 0..=target.len() {
                    let prev = target.prev_of(to_pos);
                    let next = target.at_or_depot(to_pos);
                    let delta = removal + insertion_delta(prev, next, customer, instance);
                    consider(best, relocate(delta, from_route, from_pos, to_route, to_pos));
                }
            }
        }
    }
}

fn relocate(
    delta: i64,
    from_route: usize,
    from_pos: usize,
    to_route: usize,
    to_pos: usize,
) -> Candidate {
    Candidate {
        delta,
        mv: Move::Relocate {
            from_route,
            from_pos,
            to_route,
            to_pos,
        },
    }
}

/// Cost change from removing the customer at `pos`.
fn removal_delta(route: &Route, pos: usize, instance: &Instance) -> i64 {
    let prev = route.prev_of(pos);
    let next = route.next_of(pos);
    let c = route.customers()[pos];

    // Old: prev → c → next
    // New: prev → next
    instance.distance(prev, next) - instance.distance(prev, c) - instance.distance(c, next)
}
