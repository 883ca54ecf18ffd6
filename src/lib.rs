//! Shelf placement optimization.
//!
//! Assigns a product catalog to the slots of a 7 × 7 shelf grid so that
//! each product sits on the shelves matching its demand band. Two
//! interchangeable metaheuristics search the placement space:
//!
//! - **Harmony Search (HS)**: population-based improvisation from a fixed
//!   harmony memory with pitch adjustment.
//! - **Tabu Search (TS)**: column re-draws around the best placement,
//!   refusing placements whose signature was visited recently.
//!
//! # Layout
//!
//! - [`placement`]: catalog records, the placement grid, and signatures
//! - [`fitness`]: the rule-based penalty score
//! - [`harmony`], [`tabu`]: the search engines
//! - [`optimizer`]: method selection, timing, persistence through storage traits
//!
//! Every engine takes its random source explicitly, so runs are
//! reproducible once seeded.

pub mod error;
pub mod fitness;
pub mod harmony;
pub mod optimizer;
pub mod placement;
pub mod random;
pub mod tabu;

pub use error::{OptimizeError, StoreError};
