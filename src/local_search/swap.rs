//! Customer exchange within or between routes.
//!
//! # Algorithm
//!
//! Exchanges the customers at two positions. Between routes, both loads
//! must stay within capacity after the exchange. Within a route, adjacent
//! positions share an edge and are evaluated as a unit:
//!
//! ```text
//! prev → a → b → next   becomes   prev → b → a → next
//! ```
//!
//! Non-adjacent positions are two independent replacements.
//!
//! # Complexity
//!
//! O(n²) per scan, where n = number of customers.
//!
//! # Reference
//!
//! Osman, I.H. (1993). "Metastrategy simulated annealing and tabu search
//! algorithms for the vehicle routing problem", *Annals of Operations
//! Research* 41, 421-451.

use super::moves::{consider, replacement_delta, Candidate, Move};
use crate::evaluation::fits;
use crate::models::{Instance, Route, Solution};

/// Returns the most improving capacity-feasible swap, if any.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::local_search::best_swap;
/// use u_cvrp::models::{Fleet, Instance, Route, Solution};
///
/// // depot and three customers on a line, 1 unit apart
/// let dm = DistanceMatrix::from_data(
///     4,
///     vec![0, 1, 2, 3, 1, 0, 1, 2, 2, 1, 0, 1, 3, 2, 1, 0],
/// ).unwrap();
/// let instance = Instance::new(vec![0, 10, 10, 10], Fleet::new(2, 20), dm).unwrap();
///
/// // [1, 3] and [2] → [2, 3] and [1] saves 2
/// let sol = Solution::from_routes(vec![
///     Route::from_customers(vec![1, 3], &instance),
///     Route::from_customers(vec![2], &instance),
/// ]);
/// assert_eq!(best_swap(&sol, &instance).unwrap().delta, -2);
/// ```
pub fn best_swap(solution: &Solution, instance: &Instance) -> Option<Candidate> {
    let mut best = None;
    scan(solution, instance, &mut best);
    best
}

pub(crate) fn scan(solution: &Solution, instance: &Instance, best: &mut Option<Candidate>) {
    let capacity = instance.capacity();
    let routes = solution.routes();

    for (route_a, ra) in routes.iter().enumerate() {
        for pos_a in 0..ra.len() {
            let a = ra.customers()[pos_a];
            let demand_a = instance.demand(a);

            for (route_b, rb) in routes.iter().enumerate().skip(route_a) {
                let start = if route_b == route_a { pos_a + 1 } else { 0 };
                for pos_b in start..rb.len() {
                    let b = rb.customers()[pos_b];

                    let delta = if route_a == route_b {
                        intra_delta(ra, pos_a, pos_b, instance)
                    } else {
                        let demand_b = instance.demand(b);
                        if !fits(ra.load() - demand_a, demand_b, capacity)
                            || !fits(rb.load() - demand_b, demand_a, capacity)
                        {
                            continue;
                        }
                        replacement_delta(ra, pos_a, b, instance)
                            + replacement_delta(rb, pos_b, a, instance)
                    };

                    consider(
                        best,
                        Candidate {
                            delta,
                            mv: Move::Swap {
                                route_a,
                                pos_a,
                                route_b,
                                pos_b,
                            },
                        },
                    );
                }
            }
        }
    }
}

/// Distance change from swapping positions `i < j` of one route.
fn intra_delta(route: &Route, i: usize, j: usize, instance: &Instance) -> i64 {
    let customers = route.customers();
    let (a, b) = (customers[i], customers[j]);

    if j == i + 1 {
        let prev = route.prev_of(i);
        let next = route.next_of(j);
        let old = instance.distance(prev, a) + instance.distance(a, b) + instance.distance(b, next);
        let new = instance.distance(prev, b) + instance.distance(b, a) + instance.distance(a, next);
        new - old
    } else {
        replacement_delta(route, i, b, instance) + replacement_delta(route, j, a, instance)
    }
}
