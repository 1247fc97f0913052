//! Validated problem instance.

use super::{Fleet, Location, DEPOT};
use crate::distance::DistanceMatrix;
use crate::error::InputError;

/// Everything one solve needs: demands, fleet, and the distance matrix.
///
/// The instance is plain data owned by a single solve call. Constructors and
/// improvers borrow it; nothing in it is mutated after construction.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::{Fleet, Instance, Location};
///
/// let locations = vec![
///     Location::depot("Warehouse", 40.7128, -74.0060),
///     Location::new(1, "Store1", 40.7306, -73.9866, 10),
///     Location::new(2, "Store2", 40.6782, -73.9442, 20),
/// ];
/// let instance = Instance::from_locations(&locations, Fleet::new(2, 50)).unwrap();
/// assert_eq!(instance.num_customers(), 2);
/// assert_eq!(instance.total_demand(), 30);
/// assert_eq!(instance.distance(1, 2), instance.distance(2, 1));
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    demands: Vec<i64>,
    fleet: Fleet,
    distances: DistanceMatrix,
}

impl Instance {
    /// Validates locations and fleet, then builds the haversine matrix.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if there are fewer than two locations,
    /// indices are not dense and in order, coordinates are not finite, the
    /// depot demand is non-zero, a demand is negative, or the fleet is empty
    /// or has non-positive capacity.
    pub fn from_locations(locations: &[Location], fleet: Fleet) -> Result<Self, InputError> {
        if locations.len() < 2 {
            return Err(InputError::TooFewLocations {
                count: locations.len(),
            });
        }
        for (position, location) in locations.iter().enumerate() {
            if location.index() != position {
                return Err(InputError::IndexMismatch {
                    position,
                    index: location.index(),
                });
            }
            if !location.has_finite_coordinates() {
                return Err(InputError::NonFiniteCoordinate { index: position });
            }
        }
        let demands = locations.iter().map(Location::demand).collect();
        let distances = DistanceMatrix::from_locations(locations)?;
        Self::new(demands, fleet, distances)
    }

    /// Builds an instance from an explicit demand list and distance matrix.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if there are fewer than two demands, the
    /// depot demand is non-zero, a demand is negative, the fleet is invalid,
    /// the matrix size differs from the number of demands, or the matrix is
    /// not symmetric.
    pub fn new(
        demands: Vec<i64>,
        fleet: Fleet,
        distances: DistanceMatrix,
    ) -> Result<Self, InputError> {
        if demands.len() < 2 || distances.size() != demands.len() {
            return Err(InputError::TooFewLocations {
                count: demands.len().min(distances.size()),
            });
        }
        if demands[DEPOT] != 0 {
            return Err(InputError::DepotDemand {
                demand: demands[DEPOT],
            });
        }
        if let Some((index, &demand)) = demands.iter().enumerate().find(|&(_, &d)| d < 0) {
            return Err(InputError::NegativeDemand { index, demand });
        }
        if !distances.is_symmetric() {
            return Err(InputError::AsymmetricMatrix);
        }
        fleet.validate()?;

        Ok(Self {
            demands,
            fleet,
            distances,
        })
    }

    /// Number of locations including the depot.
    pub fn num_locations(&self) -> usize {
        self.demands.len()
    }

    /// Number of customers (excluding the depot).
    pub fn num_customers(&self) -> usize {
        self.demands.len() - 1
    }

    /// Customer indices `1..n`.
    pub fn customers(&self) -> std::ops::Range<usize> {
        1..self.demands.len()
    }

    /// Demand at a location.
    pub fn demand(&self, index: usize) -> i64 {
        self.demands[index]
    }

    /// All demands, indexed by location.
    pub fn demands(&self) -> &[i64] {
        &self.demands
    }

    /// Sum of all customer demands, saturating at `i64::MAX`.
    pub fn total_demand(&self) -> i64 {
        self.demands
            .iter()
            .fold(0i64, |total, &d| total.saturating_add(d))
    }

    /// The fleet.
    pub fn fleet(&self) -> Fleet {
        self.fleet
    }

    /// Capacity of each vehicle.
    pub fn capacity(&self) -> i64 {
        self.fleet.capacity()
    }

    /// The distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Travel distance from location `from` to location `to`.
    pub fn distance(&self, from: usize, to: usize) -> i64 {
        self.distances.get(from, to)
    }
}
