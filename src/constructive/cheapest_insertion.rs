//! Cheapest feasible insertion constructive heuristic.
//!
//! # Algorithm
//!
//! Starts with one empty route per vehicle. At every step, evaluates every
//! unrouted customer `c` at every position `(prev, next)` of every route with
//! enough spare capacity:
//!
//! ```text
//! delta = d(prev, c) + d(c, next) - d(prev, next)
//! ```
//!
//! and performs the cheapest insertion. Ties are broken by lowest customer
//! index, then route index, then position, so construction is fully
//! deterministic.
//!
//! # Complexity
//!
//! O(n² × R) per insertion, O(n³ × R) overall, where R = number of routes.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use tracing::{debug, warn};

use crate::error::Infeasibility;
use crate::evaluation::fits;
use crate::models::{Instance, Solution};

/// A candidate insertion. Field order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Insertion {
    delta: i64,
    customer: usize,
    route: usize,
    position: usize,
}

/// Checks whether the demands can be packed into the fleet at all,
/// ignoring travel cost.
///
/// # Errors
///
/// [`Infeasibility::DemandExceedsCapacity`] for the lowest-indexed customer
/// that no vehicle can carry, or [`Infeasibility::FleetTooSmall`] when the
/// total demand exceeds the combined capacity.
pub fn check_capacity(instance: &Instance) -> Result<(), Infeasibility> {
    let capacity = instance.capacity();
    for index in instance.customers() {
        let demand = instance.demand(index);
        if demand > capacity {
            return Err(Infeasibility::DemandExceedsCapacity {
                index,
                demand,
                capacity,
            });
        }
    }

    // exact comparison; the reported totals saturate
    let exact_demand: i128 = instance.demands().iter().map(|&d| i128::from(d)).sum();
    let vehicles = i128::try_from(instance.fleet().num_vehicles()).unwrap_or(i128::MAX);
    if exact_demand > vehicles.saturating_mul(i128::from(capacity)) {
        return Err(Infeasibility::FleetTooSmall {
            total_demand: instance.total_demand(),
            fleet_capacity: instance.fleet().total_capacity(),
        });
    }
    Ok(())
}

/// Constructs an initial feasible solution by cheapest feasible insertion.
///
/// # Errors
///
/// Returns an [`Infeasibility`] if a demand exceeds the vehicle capacity, the
/// total demand exceeds the fleet capacity, or the greedy packing leaves a
/// customer with no route that has room for it.
///
/// # Examples
///
/// ```
/// use u_cvrp::constructive::cheapest_insertion;
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::{Fleet, Instance};
///
/// // depot and three customers on a line, 1 unit apart
/// let dm = DistanceMatrix::from_data(
///     4,
///     vec![0, 1, 2, 3, 1, 0, 1, 2, 2, 1, 0, 1, 3, 2, 1, 0],
/// ).unwrap();
/// let instance = Instance::new(vec![0, 10, 10, 10], Fleet::new(2, 30), dm).unwrap();
///
/// let solution = cheapest_insertion(&instance).unwrap();
/// assert_eq!(solution.num_served(), 3);
/// assert_eq!(solution.total_cost(), 6);
/// ```
pub fn cheapest_insertion(instance: &Instance) -> Result<Solution, Infeasibility> {
    if let Err(err) = check_capacity(instance) {
        warn!(%err, "instance cannot be packed into the fleet");
        return Err(err);
    }

    let capacity = instance.capacity();
    let num_vehicles = instance.fleet().num_vehicles();
    let mut solution = Solution::empty(num_vehicles);
    let mut unrouted: Vec<usize> = instance.customers().collect();

    while !unrouted.is_empty() {
        let mut best: Option<(Insertion, usize)> = None;

        for (slot, &customer) in unrouted.iter().enumerate() {
            let demand = instance.demand(customer);
            for r in 0..num_vehicles {
                let route = solution.route(r);
                if !fits(route.load(), demand, capacity) {
                    continue;
                }
                for position in 0..=route.len() {
                    let prev = route.prev_of(position);
                    let next = route.at_or_depot(position);
                    let delta = instance.distance(prev, customer)
                        + instance.distance(customer, next)
                        - instance.distance(prev, next);
                    let candidate = Insertion {
                        delta,
                        customer,
                        route: r,
                        position,
                    };
                    if best.is_none_or(|(b, _)| candidate < b) {
                        best = Some((candidate, slot));
                    }
                }
            }
        }

        let Some((insertion, slot)) = best else {
            let err = Infeasibility::NoFeasibleInsertion {
                index: unrouted[0],
                remaining: unrouted.len(),
            };
            warn!(%err, "construction stalled");
            return Err(err);
        };

        let demand = instance.demand(insertion.customer);
        solution
            .route_mut(insertion.route)
            .insert(insertion.position, insertion.customer, demand);
        solution.refresh_costs(instance, &[insertion.route]);
        unrouted.remove(slot);
    }

    debug!(
        cost = solution.total_cost(),
        routes = solution.num_used_routes(),
        "initial solution constructed"
    );
    Ok(solution)
}
