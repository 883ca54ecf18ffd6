//! Optimization orchestration.
//!
//! [`Optimizer`] is the entry point callers use: it reads the catalog,
//! runs the selected engine, replaces the stored allocation with the best
//! placement, and appends an [`OptimizationRun`] to the history.
//!
//! Storage is reached only through the traits in [`store`], so any
//! persistence layer can sit behind them. [`InMemoryStore`] implements all
//! of them.

mod config;
mod runner;
pub mod store;
mod types;

pub use runner::Optimizer;
pub use store::{AllocationReader, AllocationWriter, CatalogReader, HistoryWriter, InMemoryStore};
pub use types::{Method, OptimizationRun, OptimizeOutcome};
