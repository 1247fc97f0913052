//! Intra-route 2-opt move.
//!
//! # Algorithm
//!
//! For each pair of positions `i < j` in a route, compute the change in
//! distance from reversing the segment between them:
//!
//! ```text
//! delta = d(prev_i, r[j]) + d(r[i], next_j) - d(prev_i, r[i]) - d(r[j], next_j)
//! ```
//!
//! where `prev_i` and `next_j` are the depot at the route ends. The matrix
//! is symmetric, so edges inside the segment keep their cost.
//!
//! # Complexity
//!
//! O(n²) per route per scan.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use super::moves::{consider, Candidate, Move};
use crate::models::{Instance, Route, Solution};

/// Returns the most improving 2-opt move over all routes, if any.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::local_search::{best_two_opt, Move};
/// use u_cvrp::models::{Fleet, Instance, Route, Solution};
///
/// // depot and three customers on a line, 1 unit apart
/// let dm = DistanceMatrix::from_data(
///     4,
///     vec![0, 1, 2, 3, 1, 0, 1, 2, 2, 1, 0, 1, 3, 2, 1, 0],
/// ).unwrap();
/// let instance = Instance::new(vec![0, 1, 1, 1], Fleet::new(1, 10), dm).unwrap();
///
/// // 0→2→1→3→0 = 8, optimal is 6
/// let sol = Solution::from_routes(vec![Route::from_customers(vec![2, 1, 3], &instance)]);
/// let best = best_two_opt(&sol, &instance).unwrap();
/// assert_eq!(best.delta, -2);
/// assert_eq!(best.mv, Move::TwoOpt { route: 0, from: 0, to: 1 });
/// ```
pub fn best_two_opt(solution: &Solution, instance: &Instance) -> Option<Candidate> {
    let mut best = None;
    scan(solution, instance, &mut best);
    best
}

pub(crate) fn scan(solution: &Solution, instance: &Instance, best: &mut Option<Candidate>) {
    for (r, route) in solution.routes().iter().enumerate() {
        let n = route.len();
        for i in 0..n.saturating_sub(1) {
            for j in (i + 1)..n {
                consider(
                    best,
                    Candidate {
                        delta: two_opt_delta(route, i, j, instance),
                        mv: Move::TwoOpt {
                            route: r,
                            from: i,
                            to: j,
                        },
                    },
                );
            }
        }
    }
}

/// Distance change from reversing `route[i..=j]`.
fn two_opt_delta(route: &Route, i: usize, j: usize, instance: &Instance) -> i64 {
    let customers = route.customers();
    let prev_i = route.prev_of(i);
    let next_j = route.next_of(j);

    let old_cost = instance.distance(prev_i, customers[i]) + instance.distance(customers[j], next_j);
    let new_cost = instance.distance(prev_i, customers[j]) + instance.distance(customers[i], next_j);

    new_cost - old_cost
}
