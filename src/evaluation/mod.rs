//! Feasibility checking and solution evaluation.
//!
//! - [`capacity`]: capacity predicates shared by the constructor and the
//!   local search
//! - [`SolutionEvaluator`]: recomputes costs and reports invariant
//!   violations

pub mod capacity;
mod evaluator;

pub use capacity::{fits, is_within_capacity, route_load};
pub use evaluator::SolutionEvaluator;
