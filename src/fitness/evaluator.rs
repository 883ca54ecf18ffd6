//! Placement scoring.

use tracing::info;

use super::types::{DemandBand, FitnessResult, PenaltyEntry};
use crate::placement::{Placement, Product};

/// Scores a placement.
///
/// Pure: the same placement always yields the same result. Shelves are
/// visited in order, products in their in-shelf order, so the log order is
/// stable too.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use shelf_metaheur::fitness::evaluate;
/// use shelf_metaheur::placement::{Placement, Product};
///
/// let juice = Arc::new(Product::new(1, "Apple Juice", 500, 70.0));
/// let mut placement = Placement::new();
/// placement.place(5, juice, 1);
///
/// let result = evaluate(&placement);
/// assert_eq!(result.total_penalty, 5);
/// assert_eq!(
///     result.log[0].message,
///     "APPLE JUICE (avg) in shelf 5 (should be 1-2): +5.00"
/// );
/// ```
pub fn evaluate(placement: &Placement) -> FitnessResult {
    let mut result = FitnessResult::default();
    for (shelf, placed) in placement.iter() {
        if let Some(entry) = shelf_penalty(&placed.product, shelf) {
            result.total_penalty += entry.amount;
            result.log.push(entry);
        }
    }
    result
}

/// Scores a placement and reports the outcome through `tracing`.
///
/// The returned value is identical to [`evaluate`].
pub fn evaluate_verbose(placement: &Placement) -> FitnessResult {
    let result = evaluate(placement);
    info!(
        event = "fitness_report",
        products = placement.len(),
        total_penalty = result.total_penalty,
        remark = %result.remark(),
        violations = result.log.len(),
    );
    for entry in &result.log {
        info!(
            event = "shelf_violation",
            amount = entry.amount,
            "{}",
            entry.message
        );
    }
    result
}

fn shelf_penalty(product: &Product, shelf: u8) -> Option<PenaltyEntry> {
    let band = DemandBand::classify(product.demand_percent)?;
    if band.shelves().contains(&shelf) {
        return None;
    }
    let amount = band.penalty();
    Some(PenaltyEntry {
        message: format!(
            "{} ({}) in shelf {} (should be {}): +{:.2}",
            product.name.trim().to_uppercase(),
            band.label(),
            shelf,
            band.shelf_range(),
            f64::from(amount),
        ),
        amount,
    })
}
