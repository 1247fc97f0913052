//! Solution and violation types.

use serde::Serialize;

use super::{Instance, Route};

/// A type of invariant violation in a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationType {
    /// Route load exceeds vehicle capacity.
    CapacityExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Load that exceeded capacity.
        load: i64,
        /// Vehicle capacity.
        capacity: i64,
    },
    /// A customer is not served by any route.
    MissingCustomer {
        /// Customer index.
        customer: usize,
    },
    /// A customer is served more than once.
    DuplicateCustomer {
        /// Customer index.
        customer: usize,
    },
    /// A route visits the depot mid-route or an index outside the instance.
    UnknownLocation {
        /// Route index.
        route_index: usize,
        /// Offending location index.
        location: usize,
    },
    /// The recorded route load disagrees with the sum of its demands.
    LoadMismatch {
        /// Route index.
        route_index: usize,
        /// Load stored on the route.
        recorded: i64,
        /// Load recomputed from demands.
        actual: i64,
    },
    /// The recorded route cost disagrees with the distance matrix.
    RouteCostMismatch {
        /// Route index.
        route_index: usize,
        /// Cost stored on the route.
        recorded: i64,
        /// Cost recomputed from the matrix.
        actual: i64,
    },
    /// The solution total disagrees with the sum of route costs.
    TotalCostMismatch {
        /// Total stored on the solution.
        recorded: i64,
        /// Recomputed total.
        actual: i64,
    },
    /// The number of route slots differs from the fleet size.
    RouteCountMismatch {
        /// Route slots in the solution.
        routes: usize,
        /// Vehicles in the fleet.
        vehicles: usize,
    },
}

/// An invariant violation in a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A complete solution: one route slot per vehicle and the total travel cost.
///
/// Unused vehicles hold empty routes. Callers should not assume a fixed
/// number of non-empty routes.
///
/// Solutions serialize for reporting but cannot be deserialized: cached
/// loads and costs are only ever computed against an [`Instance`].
///
/// ```compile_fail
/// let _: u_cvrp::models::Solution = serde_json::from_str("{}").unwrap();
/// ```
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::{Fleet, Instance, Route, Solution};
///
/// let dm = DistanceMatrix::from_data(3, vec![0, 4, 5, 4, 0, 3, 5, 3, 0]).unwrap();
/// let instance = Instance::new(vec![0, 10, 20], Fleet::new(2, 20), dm).unwrap();
///
/// let sol = Solution::from_routes(vec![
///     Route::from_customers(vec![1], &instance),
///     Route::from_customers(vec![2], &instance),
/// ]);
/// assert_eq!(sol.total_cost(), 8 + 10);
/// assert_eq!(sol.route_indices(), vec![vec![0, 1, 0], vec![0, 2, 0]]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    routes: Vec<Route>,
    total_cost: i64,
}

impl Solution {
    /// Creates a solution with `num_vehicles` empty routes.
    pub fn empty(num_vehicles: usize) -> Self {
        Self {
            routes: vec![Route::empty(); num_vehicles],
            total_cost: 0,
        }
    }

    /// Creates a solution from routes, summing their costs.
    pub fn from_routes(routes: Vec<Route>) -> Self {
        let total_cost = routes.iter().map(Route::cost).sum();
        Self { routes, total_cost }
    }

    /// Route slots, one per vehicle.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Total travel cost across all routes.
    pub fn total_cost(&self) -> i64 {
        self.total_cost
    }

    /// Routes as full index sequences, each starting and ending at the depot.
    pub fn route_indices(&self) -> Vec<Vec<usize>> {
        self.routes.iter().map(Route::nodes).collect()
    }

    /// Number of route slots (vehicles).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Number of routes that serve at least one customer.
    pub fn num_used_routes(&self) -> usize {
        self.routes.iter().filter(|r| !r.is_empty()).count()
    }

    /// Total number of customers served.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Returns `true` if both solutions contain the same multiset of routes
    /// and the same total cost, regardless of vehicle slot order.
    pub fn is_equivalent(&self, other: &Solution) -> bool {
        if self.total_cost != other.total_cost || self.routes.len() != other.routes.len() {
            return false;
        }
        let mut mine: Vec<&[usize]> = self.routes.iter().map(Route::customers).collect();
        let mut theirs: Vec<&[usize]> = other.routes.iter().map(Route::customers).collect();
        mine.sort_unstable();
        theirs.sort_unstable();
        mine == theirs
    }

    pub(crate) fn route(&self, index: usize) -> &Route {
        &self.routes[index]
    }

    pub(crate) fn route_mut(&mut self, index: usize) -> &mut Route {
        &mut self.routes[index]
    }

    /// Recomputes the costs of the given routes and the solution total.
    pub(crate) fn refresh_costs(&mut self, instance: &Instance, touched: &[usize]) {
        for &r in touched {
            self.routes[r].refresh_cost(instance);
        }
        self.total_cost = self.routes.iter().map(Route::cost).sum();
    }
}
