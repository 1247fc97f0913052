//! Vehicle route type.

use serde::Serialize;

use super::{Instance, DEPOT};
use crate::evaluation::route_load;

/// An ordered sequence of customers served by one vehicle.
///
/// The depot is implicit at both ends and is not stored in `customers`.
/// A route tracks its running load and its travel cost so feasibility
/// checks and cost deltas never need to rescan the sequence. For the same
/// reason a route can be serialized but not deserialized.
///
/// ```compile_fail
/// let _: u_cvrp::models::Route = serde_json::from_str("{}").unwrap();
/// ```
///
/// # Examples
///
/// ```
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::models::{Fleet, Instance, Route};
///
/// let dm = DistanceMatrix::from_data(3, vec![0, 4, 5, 4, 0, 3, 5, 3, 0]).unwrap();
/// let instance = Instance::new(vec![0, 10, 20], Fleet::new(1, 50), dm).unwrap();
///
/// let route = Route::from_customers(vec![1, 2], &instance);
/// assert_eq!(route.nodes(), vec![0, 1, 2, 0]);
/// assert_eq!(route.load(), 30);
/// assert_eq!(route.cost(), 4 + 3 + 5);
///
/// let empty = Route::empty();
/// assert_eq!(empty.nodes(), vec![0, 0]);
/// assert_eq!(empty.cost(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Route {
    customers: Vec<usize>,
    load: i64,
    cost: i64,
}

impl Route {
    /// Creates a route with no customers (`[0, 0]`).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a route visiting `customers` in order, computing its load and
    /// cost from the instance.
    pub fn from_customers(customers: Vec<usize>, instance: &Instance) -> Self {
        let load = route_load(&customers, instance.demands());
        let cost = instance.distances().tour_length(DEPOT, &customers);
        Self {
            customers,
            load,
            cost,
        }
    }

    /// Customer indices in visit order (depot excluded).
    pub fn customers(&self) -> &[usize] {
        &self.customers
    }

    /// Full visit sequence including the depot at both ends.
    pub fn nodes(&self) -> Vec<usize> {
        let mut nodes = Vec::with_capacity(self.customers.len() + 2);
        nodes.push(DEPOT);
        nodes.extend_from_slice(&self.customers);
        nodes.push(DEPOT);
        nodes
    }

    /// Number of customers on this route.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns `true` if the route serves no customers.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Sum of customer demands on this route.
    pub fn load(&self) -> i64 {
        self.load
    }

    /// Travel cost of `depot → customers → depot`.
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Location that precedes position `pos` (the depot for `pos == 0`).
    pub(crate) fn prev_of(&self, pos: usize) -> usize {
        if pos == 0 {
            DEPOT
        } else {
            self.customers[pos - 1]
        }
    }

    /// Location that follows position `pos` (the depot past the end).
    pub(crate) fn next_of(&self, pos: usize) -> usize {
        self.customers.get(pos + 1).copied().unwrap_or(DEPOT)
    }

    /// Location currently at insertion slot `pos` (the depot past the end).
    pub(crate) fn at_or_depot(&self, pos: usize) -> usize {
        self.customers.get(pos).copied().unwrap_or(DEPOT)
    }

    pub(crate) fn insert(&mut self, pos: usize, customer: usize, demand: i64) {
        self.customers.insert(pos, customer);
        self.load += demand;
    }

    pub(crate) fn remove(&mut self, pos: usize, demand: i64) -> usize {
        self.load -= demand;
        self.customers.remove(pos)
    }

    pub(crate) fn replace(&mut self, pos: usize, customer: usize, load_delta: i64) -> usize {
        self.load += load_delta;
        std::mem::replace(&mut self.customers[pos], customer)
    }

    pub(crate) fn reverse(&mut self, i: usize, j: usize) {
        self.customers[i..=j].reverse();
    }

    pub(crate) fn swap_within(&mut self, i: usize, j: usize) {
        self.customers.swap(i, j);
    }

    /// Recomputes the route cost from the distance matrix.
    pub(crate) fn refresh_cost(&mut self, instance: &Instance) {
        self.cost = instance.distances().tour_length(DEPOT, &self.customers);
    }
}
