//! Error types returned by the solver.
//!
//! Malformed input and capacity-planning failures are reported separately:
//! [`InputError`] means the caller passed something the engine cannot
//! interpret, while [`Infeasibility`] is a definitive negative answer for a
//! well-formed instance.

use thiserror::Error;

/// Validation failures for locations and fleet parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    /// Fewer than two locations (a depot plus at least one customer).
    #[error("need a depot and at least one customer, got {count} location(s)")]
    TooFewLocations {
        /// Number of locations supplied.
        count: usize,
    },
    /// A location's index does not match its position in the input.
    #[error("location at position {position} has index {index}")]
    IndexMismatch {
        /// Position in the input slice.
        position: usize,
        /// Index carried by the location.
        index: usize,
    },
    /// The depot (index 0) has a non-zero demand.
    #[error("depot demand must be 0, got {demand}")]
    DepotDemand {
        /// Demand found on the depot.
        demand: i64,
    },
    /// A customer has a negative demand.
    #[error("location {index} has negative demand {demand}")]
    NegativeDemand {
        /// Location index.
        index: usize,
        /// Offending demand.
        demand: i64,
    },
    /// Latitude or longitude is NaN or infinite.
    #[error("location {index} has non-finite coordinates")]
    NonFiniteCoordinate {
        /// Location index.
        index: usize,
    },
    /// An explicit distance matrix is not symmetric with a zero diagonal.
    #[error("distance matrix must be symmetric with a zero diagonal")]
    AsymmetricMatrix,
    /// The fleet has no vehicles.
    #[error("fleet must have at least one vehicle")]
    NoVehicles,
    /// Vehicle capacity is zero or negative.
    #[error("vehicle capacity must be at least 1, got {capacity}")]
    NonPositiveCapacity {
        /// Capacity supplied.
        capacity: i64,
    },
}

/// Reasons a well-formed instance has no feasible solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Infeasibility {
    /// A single customer needs more than one vehicle can carry.
    #[error("location {index} demands {demand}, vehicle capacity is {capacity}")]
    DemandExceedsCapacity {
        /// Location index.
        index: usize,
        /// Demand at that location.
        demand: i64,
        /// Vehicle capacity.
        capacity: i64,
    },
    /// Total demand exceeds the combined fleet capacity.
    #[error("total demand {total_demand} exceeds fleet capacity {fleet_capacity}")]
    FleetTooSmall {
        /// Sum of all customer demands.
        total_demand: i64,
        /// `num_vehicles * capacity`.
        fleet_capacity: i64,
    },
    /// Demands fit in aggregate but could not be packed into the routes.
    #[error("no route has room for location {index} ({remaining} customer(s) unrouted)")]
    NoFeasibleInsertion {
        /// Lowest unrouted customer index.
        index: usize,
        /// Number of customers still unrouted.
        remaining: usize,
    },
}

/// Error returned by [`solve`](crate::solve) and [`solve_with`](crate::solve_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Malformed locations or fleet parameters.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    /// The demands cannot be served by the fleet.
    #[error("no feasible solution: {0}")]
    Infeasible(#[from] Infeasibility),
}
