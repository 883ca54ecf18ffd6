//! Storage boundaries used by the orchestrator.

use super::types::OptimizationRun;
use crate::error::StoreError;
use crate::placement::{Product, SlotAssignment};

/// Read access to the product catalog.
pub trait CatalogReader {
    /// Returns every catalog product. Called once per optimization.
    fn list_products(&self) -> Result<Vec<Product>, StoreError>;
}

/// Write access to the current allocation.
pub trait AllocationWriter {
    /// Clears the stored allocation and stores `slots` in its place.
    fn replace_allocation(&mut self, slots: &[SlotAssignment]) -> Result<(), StoreError>;
}

/// Read access to the current allocation.
pub trait AllocationReader {
    fn current_allocation(&self) -> Result<Vec<SlotAssignment>, StoreError>;
}

/// Append-only optimization history.
pub trait HistoryWriter {
    fn append_run(&mut self, run: OptimizationRun) -> Result<(), StoreError>;
}

/// Store keeping catalog, allocation, and history in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    products: Vec<Product>,
    allocation: Vec<SlotAssignment>,
    history: Vec<OptimizationRun>,
}

impl InMemoryStore {
    /// Creates a store holding the given catalog.
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            ..Self::default()
        }
    }

    /// The stored allocation.
    pub fn allocation(&self) -> &[SlotAssignment] {
        &self.allocation
    }

    /// All runs, oldest first.
    pub fn history(&self) -> &[OptimizationRun] {
        &self.history
    }

    /// Up to `limit` runs, newest first.
    pub fn recent_runs(&self, limit: usize) -> Vec<&OptimizationRun> {
        self.history.iter().rev().take(limit).collect()
    }

    /// Removes every history record.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

impl CatalogReader for InMemoryStore {
    fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        Ok(self.products.clone())
    }
}

impl AllocationWriter for InMemoryStore {
    fn replace_allocation(&mut self, slots: &[SlotAssignment]) -> Result<(), StoreError> {
        self.allocation.clear();
        self.allocation.extend_from_slice(slots);
        Ok(())
    }
}

impl AllocationReader for InMemoryStore {
    fn current_allocation(&self) -> Result<Vec<SlotAssignment>, StoreError> {
        Ok(self.allocation.clone())
    }
}

impl HistoryWriter for InMemoryStore {
    fn append_run(&mut self, run: OptimizationRun) -> Result<(), StoreError> {
        self.history.push(run);
        Ok(())
    }
}
