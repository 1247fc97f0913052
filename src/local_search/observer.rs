//! Search progress reporting.
//!
//! Observers are passed explicitly to [`improve`](super::improve); nothing
//! is recorded unless the caller asks for it.

use serde::{Deserialize, Serialize};

use super::moves::Move;

/// One applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEvent {
    /// Descent round; 0 is the first descent, later rounds follow a kick.
    pub round: usize,
    /// Pass number within the whole search, starting at 1.
    pub pass: usize,
    /// The applied move.
    pub mv: Move,
    /// Cost change of the move (always negative).
    pub delta: i64,
    /// Cost of the solution being descended after the move.
    pub cost_after: i64,
}

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StopReason {
    /// A pass found no improving move.
    LocalOptimum,
    /// The wall-clock budget elapsed.
    TimeBudget,
    /// The configured pass cap was reached.
    PassLimit,
}

/// Summary of one call to [`improve`](super::improve).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Passes started, including the final one that found nothing.
    pub passes: usize,
    /// Moves applied across all rounds, including rejected rounds.
    pub moves_applied: usize,
    /// Cost handed to the improver.
    pub initial_cost: i64,
    /// Cost of the returned solution.
    pub final_cost: i64,
    /// Why the search stopped.
    pub stop: StopReason,
}

impl SearchOutcome {
    /// Total cost reduction.
    pub fn improvement(&self) -> i64 {
        self.initial_cost - self.final_cost
    }
}

/// Receives search progress.
///
/// Both methods default to doing nothing, so implementors override only
/// what they need.
pub trait SearchObserver {
    /// Called after every applied move.
    fn on_move(&mut self, _event: &MoveEvent) {}

    /// Called once when the search stops.
    fn on_finish(&mut self, _outcome: &SearchOutcome) {}
}

/// An observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

/// An observer that records every event.
///
/// # Examples
///
/// ```
/// use u_cvrp::config::SolverConfig;
/// use u_cvrp::local_search::{MoveTrace, StopReason};
/// use u_cvrp::models::{Fleet, Location};
///
/// let locations = vec![
///     Location::depot("hub", 40.70, -74.00),
///     Location::new(1, "a", 40.71, -74.00, 10),
///     Location::new(2, "b", 40.72, -74.00, 10),
/// ];
/// let mut trace = MoveTrace::default();
/// let sol = u_cvrp::solve_with(
///     &locations,
///     Fleet::new(1, 100),
///     &SolverConfig::unbounded(),
///     &mut trace,
/// )
/// .unwrap();
/// let outcome = trace.outcome().unwrap();
/// assert_eq!(outcome.stop, StopReason::LocalOptimum);
/// assert_eq!(outcome.final_cost, sol.total_cost());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MoveTrace {
    events: Vec<MoveEvent>,
    outcome: Option<SearchOutcome>,
}

impl MoveTrace {
    /// Applied moves in order.
    pub fn events(&self) -> &[MoveEvent] {
        &self.events
    }

    /// The final outcome, once the search has finished.
    pub fn outcome(&self) -> Option<&SearchOutcome> {
        self.outcome.as_ref()
    }
}

impl SearchObserver for MoveTrace {
    fn on_move(&mut self, event: &MoveEvent) {
        self.events.push(*event);
    }

    fn on_finish(&mut self, outcome: &SearchOutcome) {
        self.outcome = Some(*outcome);
    }
}
