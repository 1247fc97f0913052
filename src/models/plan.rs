//! Named, per-vehicle delivery plans for presentation layers.

use serde::{Deserialize, Serialize};

use super::{Location, Solution};

/// One vehicle's stops resolved to location names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePlan {
    /// Vehicle slot (0-based).
    pub vehicle: usize,
    /// Location indices including the depot at both ends.
    pub stops: Vec<usize>,
    /// Location names in the same order as `stops`.
    pub names: Vec<String>,
    /// Units delivered on this route.
    pub load: i64,
    /// Route length in meters.
    pub distance: i64,
}

/// A solution resolved against its locations.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_cvrp::models::{DeliveryPlan, Location};
///
/// let locations = vec![
///     Location::depot("Warehouse", 40.7128, -74.0060),
///     Location::new(1, "Store1", 40.7306, -73.9866, 10),
/// ];
/// let solution = u_cvrp::solve(&locations, 1, 100, Duration::from_secs(1)).unwrap();
/// let plan = DeliveryPlan::from_solution(&solution, &locations);
/// assert_eq!(plan.routes[0].names, vec!["Warehouse", "Store1", "Warehouse"]);
/// assert_eq!(plan.total_distance, solution.total_cost());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPlan {
    /// One entry per vehicle slot, including unused vehicles.
    pub routes: Vec<RoutePlan>,
    /// Sum of route distances in meters.
    pub total_distance: i64,
}

impl DeliveryPlan {
    /// Resolves every route of `solution` to location names.
    ///
    /// Indices without a matching location are rendered as their number.
    pub fn from_solution(solution: &Solution, locations: &[Location]) -> Self {
        let routes = solution
            .routes()
            .iter()
            .enumerate()
            .map(|(vehicle, route)| {
                let stops = route.nodes();
                let names = stops
                    .iter()
                    .map(|&i| {
                        locations
                            .get(i)
                            .map_or_else(|| i.to_string(), |l| l.name().to_owned())
                    })
                    .collect();
                RoutePlan {
                    vehicle,
                    stops,
                    names,
                    load: route.load(),
                    distance: route.cost(),
                }
            })
            .collect();

        Self {
            routes,
            total_distance: solution.total_cost(),
        }
    }

    /// Plans for vehicles that serve at least one customer.
    pub fn used_routes(&self) -> impl Iterator<Item = &RoutePlan> {
        self.routes.iter().filter(|r| r.stops.len() > 2)
    }
}
