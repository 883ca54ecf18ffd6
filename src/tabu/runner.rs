//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Generate a random initial placement; it is the best so far
//! 2. Mark its signature tabu
//! 3. At each iteration:
//!    a. Copy the best placement and re-draw every product's column
//!    b. Skip the neighbor if its signature is tabu
//!    c. Otherwise score it, adopt it if strictly better, mark it tabu
//!    d. Evict an arbitrary signature if the tabu set overflows
//! 4. Return the best placement
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::TabuConfig;
use super::tabu_set::TabuSet;
use crate::fitness::{evaluate, evaluate_verbose, FitnessResult};
use crate::placement::{Placement, Product, NUM_COLUMNS};
use crate::random::rng_from_seed;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best placement found.
    pub best: Placement,
    /// Score of `best`, including the violation log.
    pub fitness: FitnessResult,
    /// Total iterations executed.
    pub iterations: usize,
    /// Neighbors that were scored (not tabu).
    pub evaluations: usize,
    /// Neighbors skipped because their signature was tabu.
    pub tabu_hits: usize,
    /// Iteration at which the best placement was found (0 for the initial one).
    pub best_iteration: usize,
    /// Best penalty before the first iteration and after each iteration.
    pub cost_history: Vec<u32>,
}

/// Tabu Search runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Runs Tabu Search with a generator seeded from `config.seed`.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call
    /// [`TabuConfig::validate`] first to get a descriptive error).
    pub fn run(products: &[Arc<Product>], config: &TabuConfig) -> TabuResult {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(products, config, &mut rng)
    }

    /// Runs Tabu Search drawing from the given generator.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn run_with_rng<R: Rng>(
        products: &[Arc<Product>],
        config: &TabuConfig,
        rng: &mut R,
    ) -> TabuResult {
        config.validate().expect("invalid TabuConfig");

        info!(
            event = "search_start",
            engine = "tabu",
            products = products.len(),
            iterations = config.max_iterations,
            tabu_capacity = config.tabu_capacity,
        );

        let initial = Placement::random(products, rng);
        let mut search = TabuState::new(initial, config.tabu_capacity, rng);

        let mut cost_history = Vec::with_capacity(config.max_iterations + 1);
        cost_history.push(search.best_penalty);

        for iteration in 0..config.max_iterations {
            let neighbor = column_neighbor(&search.best, rng);
            match search.consider(neighbor, rng) {
                Verdict::Tabu => trace!(event = "tabu_skip", iteration),
                Verdict::Improved => {
                    search.best_iteration = iteration + 1;
                    debug!(event = "new_best", iteration, penalty = search.best_penalty);
                }
                Verdict::Rejected => {}
            }
            cost_history.push(search.best_penalty);
        }

        let fitness = evaluate_verbose(&search.best);

        info!(
            event = "search_end",
            engine = "tabu",
            best_penalty = fitness.total_penalty,
            evaluations = search.evaluations,
            tabu_hits = search.tabu_hits,
        );

        TabuResult {
            best: search.best,
            fitness,
            iterations: config.max_iterations,
            evaluations: search.evaluations,
            tabu_hits: search.tabu_hits,
            best_iteration: search.best_iteration,
            cost_history,
        }
    }
}

/// Outcome of offering one neighbor to the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    /// Signature already tabu; the neighbor was not scored.
    Tabu,
    /// Scored strictly better and became the new best.
    Improved,
    /// Scored, but not better.
    Rejected,
}

struct TabuState {
    best: Placement,
    best_penalty: u32,
    best_iteration: usize,
    tabu: TabuSet,
    evaluations: usize,
    tabu_hits: usize,
}

impl TabuState {
    fn new<R: Rng>(initial: Placement, capacity: usize, rng: &mut R) -> Self {
        let best_penalty = evaluate(&initial).total_penalty;
        let mut tabu = TabuSet::new(capacity);
        tabu.insert(initial.signature(), rng);
        Self {
            best: initial,
            best_penalty,
            best_iteration: 0,
            tabu,
            evaluations: 0,
            tabu_hits: 0,
        }
    }

    fn consider<R: Rng>(&mut self, neighbor: Placement, rng: &mut R) -> Verdict {
        let signature = neighbor.signature();
        if self.tabu.contains(&signature) {
            self.tabu_hits += 1;
            return Verdict::Tabu;
        }

        self.evaluations += 1;
        let penalty = evaluate(&neighbor).total_penalty;
        let verdict = if penalty < self.best_penalty {
            self.best = neighbor;
            self.best_penalty = penalty;
            Verdict::Improved
        } else {
            Verdict::Rejected
        };
        self.tabu.insert(signature, rng);
        verdict
    }
}

/// Copies `placement` keeping every product on its shelf, with a fresh
/// uniformly drawn column for each.
fn column_neighbor<R: Rng>(placement: &Placement, rng: &mut R) -> Placement {
    let mut neighbor = placement.clone();
    for shelf in neighbor.shelves_mut() {
        for placed in shelf.iter_mut() {
            placed.column = rng.random_range(1..=NUM_COLUMNS);
        }
    }
    neighbor
}
