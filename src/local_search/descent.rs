//! Steepest-descent driver with optional iterated local search.
//!
//! # Algorithm
//!
//! Every pass checks the deadline and the pass cap, scans all enabled moves,
//! and applies the single best improving one. A pass that finds nothing ends
//! the descent at a local optimum.
//!
//! With perturbation enabled, each later round kicks a copy of the best
//! solution, descends from it, and keeps it only if it is strictly cheaper.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, trace};

use super::moves::{apply_candidate, Candidate};
use super::observer::{MoveEvent, SearchObserver, SearchOutcome, StopReason};
use super::perturbation::kick;
use super::{relocate, swap, two_opt};
use crate::config::{MoveSet, SolverConfig};
use crate::models::{Instance, Solution};

/// Wall-clock point after which no new pass starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    /// A deadline `budget` from now. A budget that overflows `Instant` has
    /// no deadline.
    pub fn after(budget: Duration) -> Self {
        Self(Instant::now().checked_add(budget))
    }

    /// No deadline.
    pub fn unbounded() -> Self {
        Self(None)
    }

    /// Returns `true` once the deadline has passed.
    pub fn is_expired(&self) -> bool {
        self.0.is_some_and(|at| Instant::now() >= at)
    }
}

/// Returns the best improving move among the enabled kinds, if any.
pub fn best_move(solution: &Solution, instance: &Instance, moves: MoveSet) -> Option<Candidate> {
    let mut best = None;
    if moves.two_opt {
        two_opt::scan(solution, instance, &mut best);
    }
    if moves.relocate {
        relocate::scan(solution, instance, &mut best);
    }
    if moves.swap {
        swap::scan(solution, instance, &mut best);
    }
    best
}

/// Improves a feasible solution in place. The result is feasible and never
/// costs more than the input.
///
/// The time budget starts when this function is called.
///
/// # Examples
///
/// ```
/// use u_cvrp::config::SolverConfig;
/// use u_cvrp::distance::DistanceMatrix;
/// use u_cvrp::local_search::{improve, NoopObserver, StopReason};
/// use u_cvrp::models::{Fleet, Instance, Route, Solution};
///
/// let dm = DistanceMatrix::from_data(
///     4,
///     vec![0, 1, 2, 3, 1, 0, 1, 2, 2, 1, 0, 1, 3, 2, 1, 0],
/// ).unwrap();
/// let instance = Instance::new(vec![0, 10, 10, 10], Fleet::new(2, 30), dm).unwrap();
/// let mut sol = Solution::from_routes(vec![
///     Route::from_customers(vec![3, 1], &instance),
///     Route::from_customers(vec![2], &instance),
/// ]);
///
/// let outcome = improve(&mut sol, &instance, &SolverConfig::unbounded(), &mut NoopObserver);
/// assert_eq!(outcome.stop, StopReason::LocalOptimum);
/// assert_eq!(sol.total_cost(), 6);
/// ```
pub fn improve(
    solution: &mut Solution,
    instance: &Instance,
    config: &SolverConfig,
    observer: &mut dyn SearchObserver,
) -> SearchOutcome {
    let initial_cost = solution.total_cost();
    let mut search = Descent {
        instance,
        moves: config.moves(),
        deadline: Deadline::after(config.time_budget()),
        max_passes: config.max_passes(),
        passes: 0,
        moves_applied: 0,
        observer: &mut *observer,
    };

    let mut stop = search.run(solution, 0);

    if let (StopReason::LocalOptimum, Some(perturbation)) = (stop, config.perturbation()) {
        let mut rng = StdRng::seed_from_u64(perturbation.seed);
        for round in 1..=perturbation.rounds {
            if search.deadline.is_expired() {
                stop = StopReason::TimeBudget;
                break;
            }

            let mut candidate = solution.clone();
            kick(&mut candidate, instance, perturbation.strength, &mut rng);
            let round_stop = search.run(&mut candidate, round);

            if candidate.total_cost() < solution.total_cost() {
                debug!(
                    round,
                    from = solution.total_cost(),
                    to = candidate.total_cost(),
                    "perturbation round accepted"
                );
                *solution = candidate;
            }
            if round_stop != StopReason::LocalOptimum {
                stop = round_stop;
                break;
            }
        }
    }

    let outcome = SearchOutcome {
        passes: search.passes,
        moves_applied: search.moves_applied,
        initial_cost,
        final_cost: solution.total_cost(),
        stop,
    };
    debug!(
        passes = outcome.passes,
        moves = outcome.moves_applied,
        initial_cost,
        final_cost = outcome.final_cost,
        stop = ?outcome.stop,
        "local search finished"
    );
    observer.on_finish(&outcome);
    outcome
}

struct Descent<'a> {
    instance: &'a Instance,
    moves: MoveSet,
    deadline: Deadline,
    max_passes: Option<usize>,
    passes: usize,
    moves_applied: usize,
    observer: &'a mut dyn SearchObserver,
}

impl Descent<'_> {
    /// Descends until a local optimum, the deadline, or the pass cap.
    fn run(&mut self, solution: &mut Solution, round: usize) -> StopReason {
        loop {
            if self.deadline.is_expired() {
                return StopReason::TimeBudget;
            }
            if self.max_passes.is_some_and(|cap| self.passes >= cap) {
                return StopReason::PassLimit;
            }
            self.passes += 1;

            let Some(best) = best_move(solution, self.instance, self.moves) else {
                return StopReason::LocalOptimum;
            };
            apply_candidate(best, solution, self.instance);
            self.moves_applied += 1;

            trace!(
                round,
                pass = self.passes,
                mv = ?best.mv,
                delta = best.delta,
                cost = solution.total_cost(),
                "applied move"
            );
            self.observer.on_move(&MoveEvent {
                round,
                pass: self.passes,
                mv: best.mv,
                delta: best.delta,
                cost_after: solution.total_cost(),
            });
        }
    }
}
