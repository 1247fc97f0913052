//! Dense integer distance matrix.

use super::haversine_m;
use crate::error::InputError;
use crate::models::Location;

/// A dense n×n distance matrix in meters, stored in row-major order.
///
/// Built once per solve from location coordinates and never mutated
/// afterwards. Entries are non-negative and, when built from coordinates,
/// symmetric with a zero diagonal.
///
/// # Examples
///
/// ```
/// use u_cvrp::models::Location;
/// use u_cvrp::distance::DistanceMatrix;
///
/// let locations = vec![
///     Location::depot("Warehouse", 40.7128, -74.0060),
///     Location::new(1, "Store1", 40.7306, -73.9866, 10),
///     Location::new(2, "Store2", 40.6782, -73.9442, 20),
/// ];
/// let dm = DistanceMatrix::from_locations(&locations).unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 0), 0);
/// assert_eq!(dm.get(1, 2), dm.get(2, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<i64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the haversine matrix for the given locations, rounded to
    /// whole meters.
    ///
    /// Only the upper triangle is evaluated; the lower triangle mirrors it.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::TooFewLocations`] if fewer than two locations
    /// are given.
    pub fn from_locations(locations: &[Location]) -> Result<Self, InputError> {
        let n = locations.len();
        if n < 2 {
            return Err(InputError::TooFewLocations { count: n });
        }

        let mut dm = Self {
            data: vec![0; n * n],
            size: n,
        };
        for i in 0..n {
            let from = (locations[i].latitude(), locations[i].longitude());
            for j in (i + 1)..n {
                let to = (locations[j].latitude(), locations[j].longitude());
                let d = haversine_m(from, to).round() as i64;
                dm.data[i * n + j] = d;
                dm.data[j * n + i] = d;
            }
        }
        Ok(dm)
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size` or any
    /// entry is negative.
    pub fn from_data(size: usize, data: Vec<i64>) -> Option<Self> {
        if data.len() != size * size || data.iter().any(|&d| d < 0) {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `d(i, j) == d(j, i)` for all pairs and the diagonal
    /// is zero.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            if self.get(i, i) != 0 {
                return false;
            }
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Total length of the closed tour `depot → customers... → depot`.
    ///
    /// An empty slice has length zero.
    pub fn tour_length(&self, depot: usize, customers: &[usize]) -> i64 {
        let (Some(&first), Some(&last)) = (customers.first(), customers.last()) else {
            return 0;
        };
        let inner: i64 = customers.windows(2).map(|w| self.get(w[0], w[1])).sum();
        self.get(depot, first) + inner + self.get(last, depot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_locations() -> Vec<Location> {
        vec![
            Location::depot("Warehouse", 40.7128, -74.0060),
            Location::new(1, "Store1", 40.7306, -73.9866, 10),
            Location::new(2, "Store2", 40.6782, -73.9442, 20),
            Location::new(3, "Store3", 40.7580, -73.9855, 15),
        ]
    }

    #[test]
    fn test_from_locations() {
        let dm = DistanceMatrix::from_locations(&sample_locations()).expect("valid");
        assert_eq!(dm.size(), 4);
        assert!(dm.get(0, 1) > 0);
        assert_eq!(dm.get(2, 2), 0);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_locations(&sample_locations()).expect("valid");
        assert!(dm.is_symmetric());
    }

    #[test]
    fn test_rounds_to_nearest_meter() {
        let lon = (1500.4 / crate::distance::EARTH_RADIUS_M).to_degrees();
        let locations = vec![
            Location::depot("d", 0.0, 0.0),
            Location::new(1, "c", 0.0, lon, 1),
        ];
        let dm = DistanceMatrix::from_locations(&locations).expect("valid");
        assert_eq!(dm.get(0, 1), 1500);
    }

    #[test]
    fn test_too_few_locations() {
        let locations = vec![Location::depot("d", 0.0, 0.0)];
        assert_eq!(
            DistanceMatrix::from_locations(&locations),
            Err(InputError::TooFewLocations { count: 1 })
        );
        assert_eq!(
            DistanceMatrix::from_locations(&[]),
            Err(InputError::TooFewLocations { count: 0 })
        );
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0, 5, 5, 0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5);
        assert_eq!(dm.get(1, 0), 5);
    }

    #[test]
    fn test_from_data_invalid() {
        assert!(DistanceMatrix::from_data(2, vec![0, 1, 2]).is_none());
        assert!(DistanceMatrix::from_data(2, vec![0, -1, -1, 0]).is_none());
    }

    #[test]
    fn test_asymmetric_matrix() {
        let dm = DistanceMatrix::from_data(2, vec![0, 10, 15, 0]).expect("valid");
        assert!(!dm.is_symmetric());
    }

    #[test]
    fn test_tour_length() {
        // 0 -1- 1 -1- 2 -1- 3 on a line
        let dm = DistanceMatrix::from_data(
            4,
            vec![0, 1, 2, 3, 1, 0, 1, 2, 2, 1, 0, 1, 3, 2, 1, 0],
        )
        .expect("valid");
        assert_eq!(dm.tour_length(0, &[1, 2, 3]), 6);
        assert_eq!(dm.tour_length(0, &[3, 1, 2]), 3 + 2 + 1 + 2);
        assert_eq!(dm.tour_length(0, &[]), 0);
    }
}
