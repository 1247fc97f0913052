//! Solver configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default wall-clock budget for the improvement phase.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_secs(10);

/// Which local search moves are scanned on every pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveSet {
    /// Intra-route segment reversal.
    pub two_opt: bool,
    /// Single-customer relocation within or between routes.
    pub relocate: bool,
    /// Exchange of two customers within or between routes.
    pub swap: bool,
}

impl MoveSet {
    /// All moves enabled.
    pub const fn all() -> Self {
        Self {
            two_opt: true,
            relocate: true,
            swap: true,
        }
    }

    /// No moves enabled; the improver returns its input unchanged.
    pub const fn none() -> Self {
        Self {
            two_opt: false,
            relocate: false,
            swap: false,
        }
    }
}

impl Default for MoveSet {
    fn default() -> Self {
        Self::all()
    }
}

/// Iterated local search settings.
///
/// Each round applies `strength` random feasible relocations to the best
/// solution found so far, descends again, and keeps the result only if it is
/// strictly cheaper. The RNG is seeded, so runs are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Perturbation {
    /// Number of kick-and-descend rounds.
    pub rounds: usize,
    /// Random relocations per kick.
    pub strength: usize,
    /// RNG seed.
    pub seed: u64,
}

impl Default for Perturbation {
    fn default() -> Self {
        Self {
            rounds: 20,
            strength: 3,
            seed: 42,
        }
    }
}

/// Configuration for [`solve_with`](crate::solve_with) and
/// [`improve`](crate::local_search::improve).
///
/// Default: 10 s budget, no pass limit, all moves, no perturbation.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_cvrp::config::{MoveSet, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_time_budget(Duration::from_millis(500))
///     .with_max_passes(1_000)
///     .with_moves(MoveSet { swap: false, ..MoveSet::all() });
/// assert_eq!(config.time_budget(), Duration::from_millis(500));
/// assert_eq!(config.max_passes(), Some(1_000));
/// assert!(!config.moves().swap);
/// assert!(config.perturbation().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    time_budget: Duration,
    max_passes: Option<usize>,
    moves: MoveSet,
    perturbation: Option<Perturbation>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            max_passes: None,
            moves: MoveSet::all(),
            perturbation: None,
        }
    }
}

impl SolverConfig {
    /// A configuration with no time limit. Search runs to a local optimum.
    pub fn unbounded() -> Self {
        Self::default().with_time_budget(Duration::MAX)
    }

    /// Sets the wall-clock budget for the improvement phase.
    ///
    /// A budget too large to represent as a deadline means no limit.
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    /// Caps the number of search passes.
    pub fn with_max_passes(mut self, passes: usize) -> Self {
        self.max_passes = Some(passes);
        self
    }

    /// Selects the moves to scan.
    pub fn with_moves(mut self, moves: MoveSet) -> Self {
        self.moves = moves;
        self
    }

    /// Enables iterated local search.
    pub fn with_perturbation(mut self, perturbation: Perturbation) -> Self {
        self.perturbation = Some(perturbation);
        self
    }

    /// Wall-clock budget for the improvement phase.
    pub fn time_budget(&self) -> Duration {
        self.time_budget
    }

    /// Maximum number of search passes, if capped.
    pub fn max_passes(&self) -> Option<usize> {
        self.max_passes
    }

    /// Moves scanned on every pass.
    pub fn moves(&self) -> MoveSet {
        self.moves
    }

    /// Iterated local search settings, if enabled.
    pub fn perturbation(&self) -> Option<Perturbation> {
        self.perturbation
    }
}
