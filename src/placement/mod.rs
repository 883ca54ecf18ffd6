//! Shelf placements.
//!
//! A [`Placement`] partitions a product catalog across a fixed grid of
//! [`NUM_SHELVES`] shelves and [`NUM_COLUMNS`] columns. Both engines build,
//! copy, and score placements; tabu search additionally compares them by
//! their [`SolutionSignature`].
//!
//! Shelves and columns are 1-based throughout the public API.

mod signature;
mod types;

pub use signature::SolutionSignature;
pub use types::{PlacedProduct, Placement, Product, SlotAssignment, NUM_COLUMNS, NUM_SHELVES};
