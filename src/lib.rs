//! # u-cvrp
//!
//! Capacitated vehicle routing: a single depot, a homogeneous fleet, and
//! customers with integer demands at geographic coordinates. Routes are
//! built by cheapest feasible insertion and improved by steepest-descent
//! local search under a wall-clock budget.
//!
//! ## Modules
//!
//! - [`models`]: locations, fleet, validated instance, routes, solutions, plans
//! - [`distance`]: haversine distance matrix in integer meters
//! - [`evaluation`]: capacity checks and solution validation
//! - [`constructive`]: cheapest feasible insertion
//! - [`local_search`]: 2-opt, relocate, swap, and the descent driver
//! - [`config`]: solver configuration
//! - [`error`]: input and infeasibility errors
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use u_cvrp::models::{DeliveryPlan, Location};
//!
//! let locations = vec![
//!     Location::depot("warehouse", 40.7128, -74.0060),
//!     Location::new(1, "soho", 40.7233, -74.0030, 20),
//!     Location::new(2, "chelsea", 40.7465, -74.0014, 35),
//!     Location::new(3, "tribeca", 40.7163, -74.0086, 25),
//! ];
//! let solution = u_cvrp::solve(&locations, 2, 60, Duration::from_millis(200)).unwrap();
//! assert_eq!(solution.num_served(), 3);
//!
//! let plan = DeliveryPlan::from_solution(&solution, &locations);
//! assert_eq!(plan.total_distance, solution.total_cost());
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod local_search;
pub mod models;
mod solver;

pub use config::SolverConfig;
pub use error::{Infeasibility, InputError, SolveError};
pub use solver::{solve, solve_instance, solve_with};
