mod common;

use std::time::Duration;

use u_cvrp::constructive::cheapest_insertion;
use u_cvrp::evaluation::SolutionEvaluator;
use u_cvrp::models::{DeliveryPlan, Fleet, Instance, Location};
use u_cvrp::{solve, Infeasibility, InputError, SolveError};

use common::{served, synthetic_locations};

#[test]
fn two_nodes_one_kilometer_apart() {
    // 1000 m along the equator
    let lon = (1000.0_f64 / 6_371_000.0).to_degrees();
    let locations = vec![
        Location::depot("depot", 0.0, 0.0),
        Location::new(1, "east", 0.0, lon, 5),
    ];
    let solution = solve(&locations, 1, 10, Duration::from_secs(1)).expect("feasible");

    assert_eq!(solution.route_indices(), vec![vec![0, 1, 0]]);
    assert!((solution.total_cost() - 2000).abs() <= 1);
}

#[test]
fn capacity_forces_separate_routes() {
    let locations = vec![
        Location::depot("depot", 40.7128, -74.0060),
        Location::new(1, "a", 40.7200, -74.0000, 60),
        Location::new(2, "b", 40.7210, -74.0010, 60),
    ];
    let solution = solve(&locations, 2, 100, Duration::from_secs(1)).expect("feasible");

    assert_eq!(solution.num_used_routes(), 2);
    assert!(solution.routes().iter().all(|r| r.len() == 1 && r.load() == 60));
}

#[test]
fn total_demand_over_fleet_capacity_is_infeasible() {
    let locations = synthetic_locations(5, 5)
        .into_iter()
        .map(|l| {
            if l.index() == 0 {
                l
            } else {
                Location::new(l.index(), l.name(), l.latitude(), l.longitude(), 10)
            }
        })
        .collect::<Vec<_>>();

    assert_eq!(
        solve(&locations, 1, 10, Duration::from_secs(1)),
        Err(SolveError::Infeasible(Infeasibility::FleetTooSmall {
            total_demand: 50,
            fleet_capacity: 10,
        }))
    );
}

#[test]
fn single_demand_over_capacity_is_infeasible() {
    let locations = vec![
        Location::depot("depot", 40.7128, -74.0060),
        Location::new(1, "small", 40.7200, -74.0000, 20),
        Location::new(2, "huge", 40.7300, -74.0100, 150),
    ];
    assert_eq!(
        solve(&locations, 5, 100, Duration::from_secs(1)),
        Err(SolveError::Infeasible(Infeasibility::DemandExceedsCapacity {
            index: 2,
            demand: 150,
            capacity: 100,
        }))
    );
}

#[test]
fn lone_customer_over_capacity_is_infeasible() {
    let locations = vec![
        Location::depot("depot", 40.7128, -74.0060),
        Location::new(1, "heavy", 40.7200, -74.0000, 11),
    ];
    assert_eq!(
        solve(&locations, 1, 10, Duration::from_secs(1)),
        Err(SolveError::Infeasible(Infeasibility::DemandExceedsCapacity {
            index: 1,
            demand: 11,
            capacity: 10,
        }))
    );
}

#[test]
fn demands_near_i64_max_never_share_a_route() {
    let half = i64::MAX / 2 + 1;
    let locations = vec![
        Location::depot("depot", 40.7128, -74.0060),
        Location::new(1, "a", 40.7200, -74.0000, half),
        Location::new(2, "b", 40.7300, -74.0100, half),
    ];
    let solution = solve(&locations, 2, i64::MAX, Duration::from_millis(10)).expect("feasible");

    assert_eq!(solution.num_used_routes(), 2);
    assert!(solution.routes().iter().all(|r| r.len() == 1 && r.load() == half));
    let instance = Instance::from_locations(&locations, Fleet::new(2, i64::MAX)).expect("valid");
    assert!(SolutionEvaluator::new(&instance).is_valid(&solution));
}

#[test]
fn malformed_input_is_rejected() {
    let depot = Location::depot("depot", 40.7128, -74.0060);
    let customer = Location::new(1, "a", 40.72, -74.00, 10);
    let budget = Duration::from_secs(1);

    let cases = [
        (vec![depot.clone()], 1, 10, InputError::TooFewLocations { count: 1 }),
        (
            vec![depot.clone(), Location::new(2, "b", 40.72, -74.00, 10)],
            1,
            10,
            InputError::IndexMismatch {
                position: 1,
                index: 2,
            },
        ),
        (
            vec![depot.clone(), Location::new(1, "nan", f64::NAN, -74.00, 10)],
            1,
            10,
            InputError::NonFiniteCoordinate { index: 1 },
        ),
        (
            vec![Location::new(0, "depot", 40.7128, -74.0060, 5), customer.clone()],
            1,
            10,
            InputError::DepotDemand { demand: 5 },
        ),
        (
            vec![depot.clone(), Location::new(1, "neg", 40.72, -74.00, -3)],
            1,
            10,
            InputError::NegativeDemand {
                index: 1,
                demand: -3,
            },
        ),
        (vec![depot.clone(), customer.clone()], 0, 10, InputError::NoVehicles),
        (
            vec![depot.clone(), customer.clone()],
            1,
            0,
            InputError::NonPositiveCapacity { capacity: 0 },
        ),
    ];

    for (locations, vehicles, capacity, expected) in cases {
        assert_eq!(
            solve(&locations, vehicles, capacity, budget),
            Err(SolveError::InvalidInput(expected))
        );
    }
}

#[test]
fn zero_budget_returns_constructed_solution() {
    let locations = synthetic_locations(11, 12);
    let fleet = Fleet::new(8, 150);
    let instance = Instance::from_locations(&locations, fleet).expect("valid");
    let constructed = cheapest_insertion(&instance).expect("feasible");

    let solution = solve(&locations, 8, 150, Duration::ZERO).expect("feasible");
    assert_eq!(solution, constructed);
}

#[test]
fn synthetic_city_instance() {
    let locations = synthetic_locations(2024, 20);
    let fleet = Fleet::new(14, 150);
    let instance = Instance::from_locations(&locations, fleet).expect("valid");
    let constructed = cheapest_insertion(&instance).expect("feasible");

    let solution = solve(&locations, 14, 150, Duration::from_secs(2)).expect("feasible");

    assert!(SolutionEvaluator::new(&instance).is_valid(&solution));
    assert!(solution.total_cost() <= constructed.total_cost());
    assert_eq!(served(&solution.route_indices()), (1..=20).collect::<Vec<_>>());
}

#[test]
fn delivery_plan_names_and_json() {
    let locations = vec![
        Location::depot("Warehouse", 40.7128, -74.0060),
        Location::new(1, "Store1", 40.7306, -73.9866, 40),
        Location::new(2, "Store2", 40.6782, -73.9442, 40),
    ];
    let solution = solve(&locations, 2, 50, Duration::from_secs(1)).expect("feasible");
    let plan = DeliveryPlan::from_solution(&solution, &locations);

    assert_eq!(plan.used_routes().count(), 2);
    for route in plan.used_routes() {
        assert_eq!(route.names.first().map(String::as_str), Some("Warehouse"));
        assert_eq!(route.names.last().map(String::as_str), Some("Warehouse"));
        assert_eq!(route.load, 40);
    }

    let json = serde_json::to_string(&plan).expect("serializable");
    let back: DeliveryPlan = serde_json::from_str(&json).expect("deserializable");
    assert_eq!(back, plan);
}
