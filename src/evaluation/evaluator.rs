//! Solution evaluator that recomputes loads and costs and checks invariants.

use super::route_load;
use crate::models::{Instance, Solution, Violation, ViolationType, DEPOT};

/// Checks a solution against an instance.
///
/// Reports every broken invariant: route count, capacity, coverage (each
/// customer exactly once), location validity, and stale loads or costs.
/// A valid solution yields an empty list.
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::evaluation::SolutionEvaluator;
/// use u_cvrp::models::{Fleet, Instance, Route, Solution};
///
/// let dm = DistanceMatrix::from_data(3, vec![0, 4, 5, 4, 0, 3, 5, 3, 0]).unwrap();
/// let instance = Instance::new(vec![0, 10, 20], Fleet::new(1, 50), dm).unwrap();
/// let evaluator = SolutionEvaluator::new(&instance);
///
/// let sol = Solution::from_routes(vec![Route::from_customers(vec![1, 2], &instance)]);
/// assert!(evaluator.violations(&sol).is_empty());
/// assert_eq!(evaluator.total_cost(&sol), 12);
/// ```
pub struct SolutionEvaluator<'a> {
    instance: &'a Instance,
}

impl<'a> SolutionEvaluator<'a> {
    /// Creates a new evaluator for the given instance.
    pub fn new(instance: &'a Instance) -> Self {
        Self { instance }
    }

    /// Recomputes the total travel cost from the distance matrix.
    pub fn total_cost(&self, solution: &Solution) -> i64 {
        solution
            .routes()
            .iter()
            .map(|r| self.instance.distances().tour_length(DEPOT, r.customers()))
            .sum()
    }

    /// Returns `true` if the solution has no violations.
    pub fn is_valid(&self, solution: &Solution) -> bool {
        self.violations(solution).is_empty()
    }

    /// Collects every invariant violation in the solution.
    pub fn violations(&self, solution: &Solution) -> Vec<Violation> {
        let instance = self.instance;
        let n = instance.num_locations();
        let capacity = instance.capacity();
        let mut violations = Vec::new();
        let mut seen = vec![0usize; n];

        let vehicles = instance.fleet().num_vehicles();
        if solution.num_routes() != vehicles {
            violations.push(Violation::new(ViolationType::RouteCountMismatch {
                routes: solution.num_routes(),
                vehicles,
            }));
        }

        for (route_index, route) in solution.routes().iter().enumerate() {
            let mut in_range = true;
            for &c in route.customers() {
                if c == DEPOT || c >= n {
                    in_range = false;
                    violations.push(Violation::new(ViolationType::UnknownLocation {
                        route_index,
                        location: c,
                    }));
                } else {
                    seen[c] += 1;
                }
            }
            if !in_range {
                continue;
            }

            let load = route_load(route.customers(), instance.demands());
            if load > capacity {
                violations.push(Violation::new(ViolationType::CapacityExceeded {
                    route_index,
                    load,
                    capacity,
                }));
            }
            if load != route.load() {
                violations.push(Violation::new(ViolationType::LoadMismatch {
                    route_index,
                    recorded: route.load(),
                    actual: load,
                }));
            }

            let cost = instance.distances().tour_length(DEPOT, route.customers());
            if cost != route.cost() {
                violations.push(Violation::new(ViolationType::RouteCostMismatch {
                    route_index,
                    recorded: route.cost(),
                    actual: cost,
                }));
            }
        }

        for customer in instance.customers() {
            match seen[customer] {
                1 => {}
                0 => violations.push(Violation::new(ViolationType::MissingCustomer { customer })),
                _ => violations.push(Violation::new(ViolationType::DuplicateCustomer { customer })),
            }
        }

        let actual = self.total_cost(solution);
        if actual != solution.total_cost() {
            violations.push(Violation::new(ViolationType::TotalCostMismatch {
                recorded: solution.total_cost(),
                actual,
            }));
        }

        violations
    }
}
