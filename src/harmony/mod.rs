//! Harmony Search (HS).
//!
//! A population-based metaheuristic that keeps a fixed-size harmony memory
//! of placements. Each iteration improvises one new placement: every
//! product's column is either borrowed from a random memory member (with
//! optional pitch adjustment) or drawn at random. The new placement replaces
//! the memory's last member when it scores strictly better.
//!
//! Only columns are memory-guided; shelves are always drawn uniformly.
//!
//! # References
//!
//! - Geem, Kim & Loganathan (2001), "A New Heuristic Optimization Algorithm:
//!   Harmony Search", *Simulation* 76(2), 60-68.

mod config;
mod memory;
mod runner;

pub use config::{HarmonyConfig, HMCR, HMS, NI, PAR};
pub use memory::HarmonyMemory;
pub use runner::{HarmonyResult, HarmonyRunner};
