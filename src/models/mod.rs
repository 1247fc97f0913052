//! Domain model types for capacitated vehicle routing.
//!
//! Provides the core abstractions: locations with demands, a homogeneous
//! fleet, routes as ordered sequences of customer visits, solutions, and
//! the validated instance that ties them together.

mod fleet;
mod instance;
mod location;
mod plan;
mod route;
mod solution;

pub use fleet::Fleet;
pub use instance::Instance;
pub use location::Location;
pub use plan::{DeliveryPlan, RoutePlan};
pub use route::Route;
pub use solution::{Solution, Violation, ViolationType};

/// Index of the depot in every instance.
pub const DEPOT: usize = 0;
