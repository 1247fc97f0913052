//! Local search for improving feasible CVRP solutions.
//!
//! - [`best_two_opt`]: intra-route segment reversal
//! - [`best_relocate`]: single-customer relocation within or between routes
//! - [`best_swap`]: exchange of two customers within or between routes
//! - [`improve`]: steepest descent over the enabled moves, with optional
//!   iterated local search
//!
//! All moves keep every route within capacity, and only strictly improving
//! moves are applied. Candidates are totally ordered (see [`Candidate`]), so
//! a search without a deadline is deterministic.

mod descent;
mod moves;
mod observer;
mod perturbation;
mod relocate;
mod swap;
mod two_opt;

pub use descent::{best_move, improve, Deadline};
pub use moves::{Candidate, Move};
pub use observer::{MoveEvent, MoveTrace, NoopObserver, SearchObserver, SearchOutcome, StopReason};
pub use perturbation::kick;
pub use relocate::best_relocate;
pub use swap::best_swap;
pub use two_opt::best_two_opt;
