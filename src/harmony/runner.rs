//! Harmony Search execution engine.
//!
//! # Algorithm
//!
//! 1. Fill the memory with `memory_size` random placements
//! 2. At each iteration, improvise one placement. Per product:
//!    a. With probability `hmcr`, borrow the column of a random product on a
//!       random non-empty shelf of a random memory member, and with
//!       probability `par` shift it one column right (capped)
//!    b. Otherwise draw the column uniformly
//!    c. Draw the shelf uniformly
//! 3. Replace the memory's last member if the improvisation scores lower
//! 4. Return the earliest lowest-penalty member

use std::sync::Arc;

use rand::Rng;
use tracing::{debug, info};

use super::config::HarmonyConfig;
use super::memory::HarmonyMemory;
use crate::fitness::{evaluate, evaluate_verbose, FitnessResult};
use crate::placement::{Placement, Product, NUM_COLUMNS, NUM_SHELVES};
use crate::random::rng_from_seed;

/// Result of a Harmony Search run.
#[derive(Debug, Clone)]
pub struct HarmonyResult {
    /// Best placement in the final memory.
    pub best: Placement,
    /// Score of `best`, including the violation log.
    pub fitness: FitnessResult,
    /// Improvisations executed.
    pub iterations: usize,
    /// How many improvisations replaced a memory member.
    pub replacements: usize,
    /// Best penalty in memory after initialization and after each iteration.
    pub cost_history: Vec<u32>,
}

/// Harmony Search runner.
pub struct HarmonyRunner;

impl HarmonyRunner {
    /// Runs Harmony Search with a generator seeded from `config.seed`.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (call
    /// [`HarmonyConfig::validate`] first to get a descriptive error).
    pub fn run(products: &[Arc<Product>], config: &HarmonyConfig) -> HarmonyResult {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(products, config, &mut rng)
    }

    /// Runs Harmony Search drawing from the given generator.
    ///
    /// `config.seed` is ignored.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn run_with_rng<R: Rng>(
        products: &[Arc<Product>],
        config: &HarmonyConfig,
        rng: &mut R,
    ) -> HarmonyResult {
        config.validate().expect("invalid HarmonyConfig");

        info!(
            event = "search_start",
            engine = "harmony",
            products = products.len(),
            memory_size = config.memory_size,
            iterations = config.iterations,
        );

        let members = (0..config.memory_size)
            .map(|_| Placement::random(products, &mut *rng))
            .collect();
        let mut memory = HarmonyMemory::new(members);

        let mut cost_history = Vec::with_capacity(config.iterations + 1);
        cost_history.push(memory.best_penalty().unwrap_or(0));
        let mut replacements = 0usize;

        for iteration in 0..config.iterations {
            let candidate = improvise(products, &memory, config, rng);
            let penalty = evaluate(&candidate).total_penalty;

            if memory.consider(candidate, penalty) {
                replacements += 1;
                debug!(event = "memory_replace", iteration, penalty);
            }

            cost_history.push(memory.best_penalty().unwrap_or(0));
        }

        let best = memory
            .best_index()
            .map(|idx| memory.get(idx).clone())
            .unwrap_or_default();
        let fitness = evaluate_verbose(&best);

        info!(
            event = "search_end",
            engine = "harmony",
            best_penalty = fitness.total_penalty,
            replacements,
        );

        HarmonyResult {
            best,
            fitness,
            iterations: config.iterations,
            replacements,
            cost_history,
        }
    }
}

/// Builds one new placement from the memory.
fn improvise<R: Rng>(
    products: &[Arc<Product>],
    memory: &HarmonyMemory,
    config: &HarmonyConfig,
    rng: &mut R,
) -> Placement {
    let mut placement = Placement::new();
    for product in products {
        let column = if rng.random_range(0.0..1.0) < config.hmcr {
            match borrowed_column(memory, rng) {
                Some(column) if rng.random_range(0.0..1.0) < config.par => {
                    (column + 1).min(NUM_COLUMNS)
                }
                Some(column) => column,
                None => rng.random_range(1..=NUM_COLUMNS),
            }
        } else {
            rng.random_range(1..=NUM_COLUMNS)
        };
        let shelf = rng.random_range(1..=NUM_SHELVES);
        placement.place(shelf, Arc::clone(product), column);
    }
    placement
}

/// Column of a random product on a random non-empty shelf of a random
/// memory member. `None` only if that member holds no products.
fn borrowed_column<R: Rng>(memory: &HarmonyMemory, rng: &mut R) -> Option<u8> {
    let member = memory.get(rng.random_range(0..memory.len()));
    if member.is_empty() {
        return None;
    }
    let shelf = loop {
        let shelf = member.shelf(rng.random_range(1..=NUM_SHELVES));
        if !shelf.is_empty() {
            break shelf;
        }
    };
    Some(shelf[rng.random_range(0..shelf.len())].column)
}
