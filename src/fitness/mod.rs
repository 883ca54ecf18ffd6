//! Rule-based placement scoring.
//!
//! Each product belongs to a demand band that names the shelves it should
//! sit on. A product outside its band's shelves adds a fixed penalty and a
//! human-readable log line. The score is the sum of penalties; `0` means
//! every rule is satisfied.
//!
//! | Demand            | Band   | Shelves | Penalty |
//! |-------------------|--------|---------|---------|
//! | `60 ≤ d ≤ 80`     | avg    | 1-2     | 5       |
//! | `d > 90`          | high   | 3-5     | 7       |
//! | `d < 60`          | low    | 6-7     | 5       |
//! | `80 < d ≤ 90`     | —      | any     | 0       |
//!
//! Bands are checked in that order and the first match wins.

mod evaluator;
mod types;

pub use evaluator::{evaluate, evaluate_verbose};
pub use types::{DemandBand, FitnessResult, PenaltyEntry, QualityRemark};
