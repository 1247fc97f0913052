//! Capacity feasibility checks.
//!
//! [`fits`] is the O(1) guard used together with per-route running loads;
//! the slice forms rescan a route and are meant for validation.

/// Returns `true` if adding `demand` to a route carrying `load` stays within
/// `capacity`. A sum that overflows `i64` never fits.
///
/// # Examples
///
/// ```
/// use u_cvrp::evaluation::fits;
///
/// assert!(fits(40, 60, 100));
/// assert!(!fits(41, 60, 100));
/// assert!(!fits(i64::MAX / 2 + 1, i64::MAX / 2 + 1, i64::MAX));
/// ```
#[inline]
pub fn fits(load: i64, demand: i64, capacity: i64) -> bool {
    load.checked_add(demand).is_some_and(|total| total <= capacity)
}

/// Sum of demands of the given customers, saturating at `i64::MAX`.
pub fn route_load(customers: &[usize], demands: &[i64]) -> i64 {
    customers
        .iter()
        .fold(0i64, |load, &c| load.saturating_add(demands[c]))
}

/// Returns `true` if the customers' total demand is within `capacity`.
///
/// # Examples
///
/// ```
/// use u_cvrp::evaluation::is_within_capacity;
///
/// let demands = [0, 60, 60];
/// assert!(is_within_capacity(&[1], &demands, 100));
/// assert!(!is_within_capacity(&[1, 2], &demands, 100));
/// ```
pub fn is_within_capacity(customers: &[usize], demands: &[i64], capacity: i64) -> bool {
    route_load(customers, demands) <= capacity
}
