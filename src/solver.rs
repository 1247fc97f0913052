//! Solver entry points: validate, construct, improve.

use std::time::Duration;

use tracing::info;

use crate::config::SolverConfig;
use crate::constructive::cheapest_insertion;
use crate::error::SolveError;
use crate::evaluation::SolutionEvaluator;
use crate::local_search::{improve, NoopObserver, SearchObserver};
use crate::models::{Fleet, Instance, Location, Solution};

/// Solves a CVRP instance given as geographic locations.
///
/// `locations[0]` is the depot and every location's `index` must equal its
/// position. Distances are rounded haversine meters. Construction always
/// runs to completion; `time_budget` bounds only the improvement phase,
/// and `Duration::MAX` lets it run to a local optimum.
///
/// The returned solution has exactly `num_vehicles` route slots, some of
/// which may be empty.
///
/// # Errors
///
/// [`SolveError::InvalidInput`] for malformed locations or fleet, and
/// [`SolveError::Infeasible`] when the demands cannot be packed into the
/// fleet.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_cvrp::models::Location;
///
/// let locations = vec![
///     Location::depot("hub", 40.70, -74.00),
///     Location::new(1, "north", 40.75, -74.00, 60),
///     Location::new(2, "east", 40.70, -73.95, 60),
/// ];
/// let solution = u_cvrp::solve(&locations, 2, 100, Duration::from_secs(1)).unwrap();
/// assert_eq!(solution.num_used_routes(), 2);
/// assert_eq!(solution.num_served(), 2);
/// ```
pub fn solve(
    locations: &[Location],
    num_vehicles: usize,
    vehicle_capacity: i64,
    time_budget: Duration,
) -> Result<Solution, SolveError> {
    let config = SolverConfig::default().with_time_budget(time_budget);
    solve_with(
        locations,
        Fleet::new(num_vehicles, vehicle_capacity),
        &config,
        &mut NoopObserver,
    )
}

/// Configurable form of [`solve`].
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_with(
    locations: &[Location],
    fleet: Fleet,
    config: &SolverConfig,
    observer: &mut dyn SearchObserver,
) -> Result<Solution, SolveError> {
    let instance = Instance::from_locations(locations, fleet)?;
    solve_instance(&instance, config, observer)
}

/// Solves an already validated instance, for callers that bring their own
/// distance matrix.
///
/// # Errors
///
/// [`SolveError::Infeasible`] when the demands cannot be packed into the
/// fleet.
pub fn solve_instance(
    instance: &Instance,
    config: &SolverConfig,
    observer: &mut dyn SearchObserver,
) -> Result<Solution, SolveError> {
    info!(
        locations = instance.num_locations(),
        vehicles = instance.fleet().num_vehicles(),
        capacity = instance.capacity(),
        "solving"
    );

    let mut solution = cheapest_insertion(instance)?;
    let outcome = improve(&mut solution, instance, config, observer);

    debug_assert!(
        SolutionEvaluator::new(instance).is_valid(&solution),
        "solver produced an invalid solution: {:?}",
        SolutionEvaluator::new(instance).violations(&solution)
    );

    info!(
        routes = solution.num_used_routes(),
        cost = solution.total_cost(),
        stop = ?outcome.stop,
        "solved"
    );
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::DistanceMatrix;
    use crate::error::{Infeasibility, InputError};
    use crate::local_search::MoveTrace;

    fn locations() -> Vec<Location> {
        vec![
            Location::depot("hub", 40.70, -74.00),
            Location::new(1, "a", 40.72, -74.00, 30),
            Location::new(2, "b", 40.70, -73.97, 30),
            Location::new(3, "c", 40.68, -74.01, 30),
            Location::new(4, "d", 40.73, -73.99, 30),
        ]
    }

    #[test]
    fn test_solve_is_valid() {
        let locs = locations();
        let sol = solve(&locs, 2, 60, Duration::from_secs(1)).expect("feasible");
        let inst = Instance::from_locations(&locs, Fleet::new(2, 60)).expect("valid");
        assert!(SolutionEvaluator::new(&inst).is_valid(&sol));
        assert_eq!(sol.num_routes(), 2);
        assert_eq!(sol.num_served(), 4);
    }

    #[test]
    fn test_improvement_never_worse_than_construction() {
        let locs = locations();
        let inst = Instance::from_locations(&locs, Fleet::new(3, 90)).expect("valid");
        let constructed = cheapest_insertion(&inst).expect("feasible");
        let sol = solve_instance(&inst, &SolverConfig::unbounded(), &mut NoopObserver)
            .expect("feasible");
        assert!(sol.total_cost() <= constructed.total_cost());
    }

    #[test]
    fn test_observer_sees_outcome() {
        let locs = locations();
        let mut trace = MoveTrace::default();
        let sol = solve_with(&locs, Fleet::new(2, 60), &SolverConfig::unbounded(), &mut trace)
            .expect("feasible");
        assert_eq!(trace.outcome().map(|o| o.final_cost), Some(sol.total_cost()));
    }

    #[test]
    fn test_solve_invalid_input() {
        let locs = locations();
        assert_eq!(
            solve(&locs, 0, 60, Duration::ZERO),
            Err(SolveError::InvalidInput(InputError::NoVehicles))
        );
        assert_eq!(
            solve(&locs[..1], 1, 60, Duration::ZERO),
            Err(SolveError::InvalidInput(InputError::TooFewLocations { count: 1 }))
        );
    }

    #[test]
    fn test_solve_infeasible() {
        let locs = locations();
        assert_eq!(
            solve(&locs, 1, 100, Duration::ZERO),
            Err(SolveError::Infeasible(Infeasibility::FleetTooSmall {
                total_demand: 120,
                fleet_capacity: 100,
            }))
        );
    }

    #[test]
    fn test_solve_instance_with_explicit_matrix() {
        let dm = DistanceMatrix::from_data(3, vec![0, 5, 5, 5, 0, 8, 5, 8, 0]).expect("valid");
        let inst = Instance::new(vec![0, 10, 10], Fleet::new(2, 10), dm).expect("valid");
        let sol = solve_instance(&inst, &SolverConfig::unbounded(), &mut NoopObserver)
            .expect("feasible");
        assert_eq!(sol.route_indices(), vec![vec![0, 1, 0], vec![0, 2, 0]]);
        assert_eq!(sol.total_cost(), 20);
    }
}
