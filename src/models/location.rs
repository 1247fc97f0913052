//! Delivery location type.

use serde::{Deserialize, Serialize};

/// A depot or delivery location.
///
/// Location 0 is the depot. Coordinates are in decimal degrees; demand is
/// the number of units delivered to this location.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::Location;
///
/// let depot = Location::depot("Warehouse", 40.7128, -74.0060);
/// assert_eq!(depot.index(), 0);
/// assert_eq!(depot.demand(), 0);
///
/// let store = Location::new(1, "Store1", 40.73, -73.99, 25);
/// assert_eq!(store.index(), 1);
/// assert_eq!(store.name(), "Store1");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    index: usize,
    name: String,
    latitude: f64,
    longitude: f64,
    demand: i64,
}

impl Location {
    /// Creates a new location.
    pub fn new(
        index: usize,
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        demand: i64,
    ) -> Self {
        Self {
            index,
            name: name.into(),
            latitude,
            longitude,
            demand,
        }
    }

    /// Creates the depot (index 0, demand 0).
    pub fn depot(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self::new(0, name, latitude, longitude, 0)
    }

    /// Location index (0 = depot).
    pub fn index(&self) -> usize {
        self.index
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Units to deliver.
    pub fn demand(&self) -> i64 {
        self.demand
    }

    /// Returns `true` if both coordinates are finite.
    pub fn has_finite_coordinates(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}
