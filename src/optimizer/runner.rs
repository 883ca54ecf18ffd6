//! Orchestrator execution.

use std::sync::Arc;
use std::time::{Instant, SystemTime};

use rand::Rng;
use tracing::{error, info};

use super::config::OptimizerConfig;
use super::store::{AllocationWriter, CatalogReader, HistoryWriter};
use super::types::{Method, OptimizationRun, OptimizeOutcome};
use crate::error::{OptimizeError, Result, StoreError};
use crate::fitness::FitnessResult;
use crate::harmony::HarmonyRunner;
use crate::placement::{Placement, Product};
use crate::random::rng_from_seed;
use crate::tabu::TabuRunner;

/// Runs an engine against a store and records the outcome.
///
/// # Usage
///
/// ```
/// use shelf_metaheur::optimizer::{InMemoryStore, Method, Optimizer};
/// use shelf_metaheur::placement::Product;
///
/// let store = InMemoryStore::new(vec![
///     Product::new(1, "Apple Juice", 500, 70.0),
///     Product::new(2, "Chips", 150, 95.0),
/// ]);
/// let mut optimizer = Optimizer::with_seed(store, 42);
///
/// let outcome = optimizer.optimize(Method::Harmony).unwrap();
/// assert_eq!(optimizer.store().allocation().len(), 2);
/// assert_eq!(optimizer.store().history().len(), 1);
/// assert_eq!(optimizer.store().history()[0].fitness_score, outcome.fitness_score);
/// ```
#[derive(Debug)]
pub struct Optimizer<S> {
    store: S,
    config: OptimizerConfig,
}

impl<S> Optimizer<S>
where
    S: CatalogReader + AllocationWriter + HistoryWriter,
{
    /// Creates an optimizer with the production engine parameters.
    pub fn new(store: S) -> Self {
        Self::with_config(store, OptimizerConfig::default())
    }

    /// Creates an optimizer with the production engine parameters and a
    /// fixed seed, so repeated runs over the same catalog match.
    pub fn with_seed(store: S, seed: u64) -> Self {
        Self::with_config(store, OptimizerConfig::default().with_seed(seed))
    }

    pub(crate) fn with_config(store: S, config: OptimizerConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Runs `method` with a generator seeded from that engine's config.
    ///
    /// On success the stored allocation holds the returned placement and one
    /// run record has been appended to the history.
    ///
    /// # Errors
    ///
    /// - [`OptimizeError::InvalidConfig`] if the engine parameters are invalid
    /// - [`OptimizeError::Storage`] if reading the catalog, replacing the
    ///   allocation, or appending the run record fails
    pub fn optimize(&mut self, method: Method) -> Result<OptimizeOutcome> {
        let seed = match method {
            Method::Harmony => self.config.harmony.seed,
            Method::Tabu => self.config.tabu.seed,
        };
        let mut rng = rng_from_seed(seed);
        self.optimize_with_rng(method, &mut rng)
    }

    /// Runs `method` drawing every random decision from `rng`.
    ///
    /// # Errors
    ///
    /// Same as [`optimize`](Self::optimize).
    pub fn optimize_with_rng<R: Rng>(
        &mut self,
        method: Method,
        rng: &mut R,
    ) -> Result<OptimizeOutcome> {
        self.config.validate().map_err(OptimizeError::InvalidConfig)?;

        let started = Instant::now();
        let products: Vec<Arc<Product>> = self
            .store
            .list_products()
            .inspect_err(log_failure("catalog_read_failed"))?
            .into_iter()
            .map(Arc::new)
            .collect();

        info!(event = "optimize_start", method = %method, products = products.len());

        let (placement, fitness) = self.search(method, &products, rng);

        self.store
            .replace_allocation(&placement.assignments())
            .inspect_err(log_failure("allocation_write_failed"))?;

        let elapsed_seconds = round_hundredths(started.elapsed().as_secs_f64());
        let penalty_log = fitness.messages();

        self.store
            .append_run(OptimizationRun {
                method,
                fitness_score: fitness.total_penalty,
                elapsed_seconds,
                penalty_log: penalty_log.join("\n"),
                timestamp: SystemTime::now(),
            })
            .inspect_err(log_failure("history_append_failed"))?;

        info!(
            event = "optimize_end",
            method = %method,
            fitness_score = fitness.total_penalty,
            elapsed_seconds,
        );

        Ok(OptimizeOutcome {
            method,
            fitness_score: fitness.total_penalty,
            penalty_log,
            elapsed_seconds,
            placement,
        })
    }

    fn search<R: Rng>(
        &self,
        method: Method,
        products: &[Arc<Product>],
        rng: &mut R,
    ) -> (Placement, FitnessResult) {
        match method {
            Method::Harmony => {
                let result = HarmonyRunner::run_with_rng(products, &self.config.harmony, rng);
                (result.best, result.fitness)
            }
            Method::Tabu => {
                let result = TabuRunner::run_with_rng(products, &self.config.tabu, rng);
                (result.best, result.fitness)
            }
        }
    }
}

fn log_failure(event: &'static str) -> impl Fn(&StoreError) {
    move |e: &StoreError| error!(event, error = %e)
}

fn round_hundredths(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}
