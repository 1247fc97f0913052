mod common;

use std::time::Duration;

use proptest::prelude::*;
use u_cvrp::config::{Perturbation, SolverConfig};
use u_cvrp::constructive::cheapest_insertion;
use u_cvrp::distance::DistanceMatrix;
use u_cvrp::evaluation::SolutionEvaluator;
use u_cvrp::local_search::{best_move, improve, NoopObserver};
use u_cvrp::models::{Fleet, Instance, DEPOT};
use u_cvrp::{solve_with, Infeasibility, SolveError};

use common::{served, synthetic_locations};

/// Seed, number of customers, vehicle capacity. Capacity is at least the
/// largest possible demand.
fn instance_params() -> impl Strategy<Value = (u64, usize, i64)> {
    (any::<u64>(), 1usize..15, 60i64..=200)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    // One vehicle per customer always leaves an empty route to insert into.
    #[test]
    fn solutions_are_feasible_and_cover_every_customer((seed, n, capacity) in instance_params()) {
        let locations = synthetic_locations(seed, n);
        let fleet = Fleet::new(n, capacity);
        let config = SolverConfig::default().with_time_budget(Duration::from_millis(50));
        let solution = solve_with(&locations, fleet, &config, &mut NoopObserver).unwrap();
        let instance = Instance::from_locations(&locations, fleet).unwrap();

        let violations = SolutionEvaluator::new(&instance).violations(&solution);
        prop_assert!(violations.is_empty(), "{:?}", violations);
        prop_assert_eq!(solution.num_routes(), n);

        let routes = solution.route_indices();
        for route in &routes {
            prop_assert_eq!(route.first(), Some(&DEPOT));
            prop_assert_eq!(route.last(), Some(&DEPOT));
        }
        prop_assert_eq!(served(&routes), (1..=n).collect::<Vec<_>>());

        let recomputed: i64 = routes
            .iter()
            .flat_map(|r| r.windows(2))
            .map(|w| instance.distance(w[0], w[1]))
            .sum();
        prop_assert_eq!(solution.total_cost(), recomputed);
    }

    #[test]
    fn improvement_never_increases_cost(
        (seed, n, capacity) in instance_params(),
        budget_ms in prop_oneof![Just(0u64), 1u64..20],
    ) {
        let locations = synthetic_locations(seed, n);
        let instance = Instance::from_locations(&locations, Fleet::new(n, capacity)).unwrap();
        let constructed = cheapest_insertion(&instance).unwrap();

        let mut improved = constructed.clone();
        let config = SolverConfig::default().with_time_budget(Duration::from_millis(budget_ms));
        let outcome = improve(&mut improved, &instance, &config, &mut NoopObserver);

        prop_assert!(improved.total_cost() <= constructed.total_cost());
        prop_assert_eq!(outcome.initial_cost, constructed.total_cost());
        prop_assert_eq!(outcome.final_cost, improved.total_cost());
        prop_assert!(SolutionEvaluator::new(&instance).is_valid(&improved));
        if budget_ms == 0 {
            prop_assert_eq!(&improved, &constructed);
        }
    }

    #[test]
    fn unbounded_search_ends_at_local_optimum((seed, n, capacity) in instance_params()) {
        let locations = synthetic_locations(seed, n);
        let instance = Instance::from_locations(&locations, Fleet::new(n, capacity)).unwrap();
        let mut solution = cheapest_insertion(&instance).unwrap();
        let config = SolverConfig::unbounded();
        improve(&mut solution, &instance, &config, &mut NoopObserver);

        prop_assert!(best_move(&solution, &instance, config.moves()).is_none());
    }

    #[test]
    fn distance_matrix_is_symmetric_with_zero_diagonal(seed in any::<u64>(), n in 1usize..25) {
        let locations = synthetic_locations(seed, n);
        let matrix = DistanceMatrix::from_locations(&locations).unwrap();

        prop_assert!(matrix.is_symmetric());
        for i in 0..matrix.size() {
            prop_assert_eq!(matrix.get(i, i), 0);
            for j in 0..matrix.size() {
                prop_assert_eq!(matrix.get(i, j), matrix.get(j, i));
                prop_assert!(matrix.get(i, j) >= 0);
            }
        }
    }

    #[test]
    fn unbounded_solve_is_deterministic((seed, n, capacity) in instance_params()) {
        let locations = synthetic_locations(seed, n);
        let fleet = Fleet::new(n, capacity);
        let config = SolverConfig::unbounded();

        let first = solve_with(&locations, fleet, &config, &mut NoopObserver).unwrap();
        let second = solve_with(&locations, fleet, &config, &mut NoopObserver).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn perturbed_solve_is_deterministic_and_no_worse(
        (seed, n, capacity) in instance_params(),
        rng_seed in any::<u64>(),
    ) {
        let locations = synthetic_locations(seed, n);
        let fleet = Fleet::new(n, capacity);
        let plain = SolverConfig::unbounded();
        let perturbed = SolverConfig::unbounded().with_perturbation(Perturbation {
            rounds: 5,
            strength: 2,
            seed: rng_seed,
        });

        let baseline = solve_with(&locations, fleet, &plain, &mut NoopObserver).unwrap();
        let first = solve_with(&locations, fleet, &perturbed, &mut NoopObserver).unwrap();
        let second = solve_with(&locations, fleet, &perturbed, &mut NoopObserver).unwrap();

        prop_assert!(first.total_cost() <= baseline.total_cost());
        prop_assert_eq!(first, second);
    }

    // Tight fleets may defeat the greedy packing, but never with a bogus
    // aggregate answer.
    #[test]
    fn tight_fleet_fails_only_on_packing((seed, n, capacity) in instance_params()) {
        let locations = synthetic_locations(seed, n);
        let total: i64 = locations.iter().map(|l| l.demand()).sum();
        let vehicles = usize::try_from((total + capacity - 1) / capacity).unwrap();
        let config = SolverConfig::default().with_time_budget(Duration::from_millis(20));

        match solve_with(&locations, Fleet::new(vehicles, capacity), &config, &mut NoopObserver) {
            Ok(solution) => prop_assert_eq!(solution.num_served(), n),
            Err(SolveError::Infeasible(Infeasibility::NoFeasibleInsertion { .. })) => {}
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }
}
