//! Move representation, candidate ordering, and move application.

use serde::{Deserialize, Serialize};

use crate::models::{Instance, Route, Solution, DEPOT};

/// A local search move.
///
/// Variant order is part of the tie-break: when two candidates have the
/// same delta, 2-opt beats relocate beats swap, then route indices and
/// positions decide lexicographically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Reverse `customers[from..=to]` of `route`.
    TwoOpt {
        /// Route index.
        route: usize,
        /// First reversed position.
        from: usize,
        /// Last reversed position.
        to: usize,
    },
    /// Move the customer at `from_pos` of `from_route` to `to_pos` of
    /// `to_route`. For an intra-route move `to_pos` indexes the route after
    /// removal.
    Relocate {
        /// Source route.
        from_route: usize,
        /// Source position.
        from_pos: usize,
        /// Target route.
        to_route: usize,
        /// Target position.
        to_pos: usize,
    },
    /// Exchange the customers at two positions.
    Swap {
        /// First route.
        route_a: usize,
        /// Position in the first route.
        pos_a: usize,
        /// Second route (may equal `route_a`).
        route_b: usize,
        /// Position in the second route.
        pos_b: usize,
    },
}

/// A move with its cost change. Ordered by delta, then by move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Candidate {
    /// Change in total cost if applied.
    pub delta: i64,
    /// The move.
    pub mv: Move,
}

/// Keeps `candidate` if it strictly improves and beats the current best.
pub(crate) fn consider(best: &mut Option<Candidate>, candidate: Candidate) {
    if candidate.delta < 0 && best.is_none_or(|b| candidate < b) {
        *best = Some(candidate);
    }
}

/// Cost change from replacing the customer at `pos` with `customer`,
/// keeping its neighbors.
pub(crate) fn replacement_delta(
    route: &Route,
    pos: usize,
    customer: usize,
    instance: &Instance,
) -> i64 {
    let prev = route.prev_of(pos);
    let next = route.next_of(pos);
    let old = route.customers()[pos];
    instance.distance(prev, customer) + instance.distance(customer, next)
        - instance.distance(prev, old)
        - instance.distance(old, next)
}

/// Cost change from inserting `customer` between `prev` and `next`.
pub(crate) fn insertion_delta(prev: usize, next: usize, customer: usize, instance: &Instance) -> i64 {
    instance.distance(prev, customer) + instance.distance(customer, next)
        - instance.distance(prev, next)
}

/// Applies a move, updating loads and recomputing the affected route costs
/// and the total.
pub(crate) fn apply(mv: Move, solution: &mut Solution, instance: &Instance) {
    match mv {
        Move::TwoOpt { route, from, to } => {
            solution.route_mut(route).reverse(from, to);
            solution.refresh_costs(instance, &[route]);
        }
        Move::Relocate {
            from_route,
            from_pos,
            to_route,
            to_pos,
        } => {
            let customer = solution.route(from_route).customers()[from_pos];
            let demand = instance.demand(customer);
            solution.route_mut(from_route).remove(from_pos, demand);
            solution.route_mut(to_route).insert(to_pos, customer, demand);
            solution.refresh_costs(instance, &[from_route, to_route]);
        }
        Move::Swap {
            route_a,
            pos_a,
            route_b,
            pos_b,
        } => {
            if route_a == route_b {
                solution.route_mut(route_a).swap_within(pos_a, pos_b);
            } else {
                let a = solution.route(route_a).customers()[pos_a];
                let b = solution.route(route_b).customers()[pos_b];
                let shift = instance.demand(b) - instance.demand(a);
                solution.route_mut(route_a).replace(pos_a, b, shift);
                solution.route_mut(route_b).replace(pos_b, a, -shift);
            }
            solution.refresh_costs(instance, &[route_a, route_b]);
        }
    }
}

/// Applies a candidate and checks, in debug builds, that the cost moved by
/// exactly the predicted delta and that the touched routes stay within
/// capacity.
pub(crate) fn apply_candidate(candidate: Candidate, solution: &mut Solution, instance: &Instance) {
    let before = solution.total_cost();
    apply(candidate.mv, solution, instance);

    debug_assert_eq!(
        solution.total_cost(),
        before + candidate.delta,
        "{:?} changed the cost by a different amount than predicted",
        candidate.mv
    );
    debug_assert!(
        touched_routes(candidate.mv)
            .into_iter()
            .all(|r| solution.route(r).load() <= instance.capacity()),
        "{:?} broke vehicle capacity",
        candidate.mv
    );
}

fn touched_routes(mv: Move) -> [usize; 2] {
    match mv {
        Move::TwoOpt { route, .. } => [route, route],
        Move::Relocate {
            from_route,
            to_route,
            ..
        } => [from_route, to_route],
        Move::Swap {
            route_a, route_b, ..
        } => [route_a, route_b],
    }
}

/// Location at index `k` of `route` once position `skip` is removed (the
/// depot past the end).
pub(crate) fn location_skipping(route: &Route, skip: usize, k: usize) -> usize {
    let idx = if k < skip { k } else { k + 1 };
    route.at_or_depot(idx)
}

/// Neighbors of insertion slot `pos` in `route` with position `skip`
/// removed.
pub(crate) fn slot_skipping(route: &Route, skip: usize, pos: usize) -> (usize, usize) {
    let prev = if pos == 0 {
        DEPOT
    } else {
        location_skipping(route, skip, pos - 1)
    };
    (prev, location_skipping(route, skip, pos))
}
