//! Homogeneous vehicle fleet.

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// A fleet of identical vehicles.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::Fleet;
///
/// let fleet = Fleet::new(3, 100);
/// assert_eq!(fleet.num_vehicles(), 3);
/// assert_eq!(fleet.capacity(), 100);
/// assert_eq!(fleet.total_capacity(), 300);
/// assert!(fleet.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fleet {
    num_vehicles: usize,
    capacity: i64,
}

impl Fleet {
    /// Creates a fleet of `num_vehicles` vehicles with the given capacity.
    pub fn new(num_vehicles: usize, capacity: i64) -> Self {
        Self {
            num_vehicles,
            capacity,
        }
    }

    /// Number of vehicles (route slots).
    pub fn num_vehicles(&self) -> usize {
        self.num_vehicles
    }

    /// Capacity of each vehicle.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Combined capacity of all vehicles, saturating on overflow.
    pub fn total_capacity(&self) -> i64 {
        i64::try_from(self.num_vehicles)
            .unwrap_or(i64::MAX)
            .saturating_mul(self.capacity)
    }

    /// Checks that the fleet has at least one vehicle with positive capacity.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.num_vehicles == 0 {
            return Err(InputError::NoVehicles);
        }
        if self.capacity < 1 {
            return Err(InputError::NonPositiveCapacity {
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fleet_new() {
        let f = Fleet::new(2, 50);
        assert_eq!(f.num_vehicles(), 2);
        assert_eq!(f.capacity(), 50);
        assert_eq!(f.total_capacity(), 100);
    }

    #[test]
    fn test_fleet_validate() {
        assert_eq!(Fleet::new(0, 10).validate(), Err(InputError::NoVehicles));
        assert_eq!(
            Fleet::new(1, 0).validate(),
            Err(InputError::NonPositiveCapacity { capacity: 0 })
        );
        assert!(Fleet::new(1, 1).validate().is_ok());
    }

    #[test]
    fn test_total_capacity_saturates() {
        let f = Fleet::new(4, i64::MAX);
        assert_eq!(f.total_capacity(), i64::MAX);
    }
}
