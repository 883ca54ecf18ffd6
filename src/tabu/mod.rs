//! Tabu Search (TS).
//!
//! A single-solution trajectory metaheuristic that remembers the signatures
//! of recently visited placements and refuses to revisit them. Neighbors
//! keep every product on its shelf and re-draw all columns; a neighbor is
//! adopted only when it scores strictly better than the best so far.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod runner;
mod tabu_set;

pub use config::{TabuConfig, TABU_CAPACITY};
pub use runner::{TabuResult, TabuRunner};
pub use tabu_set::TabuSet;
