//! Order-independent placement fingerprints.

use super::types::Placement;

/// Canonical key of a placement: the sorted `(product_id, shelf, column)`
/// triples of every placed product.
///
/// Two placements that put the same products on the same slots have equal
/// signatures, regardless of the order in which shelves or products were
/// filled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SolutionSignature(Vec<(u64, u8, u8)>);

impl SolutionSignature {
    /// The sorted triples.
    pub fn triples(&self) -> &[(u64, u8, u8)] {
        &self.0
    }
}

impl Placement {
    /// Computes the canonical signature of this placement.
    pub fn signature(&self) -> SolutionSignature {
        let mut triples: Vec<(u64, u8, u8)> = self
            .iter()
            .map(|(shelf, placed)| (placed.product.id, shelf, placed.column))
            .collect();
        triples.sort_unstable();
        SolutionSignature(triples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::{Product, NUM_COLUMNS, NUM_SHELVES};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn product(id: u64) -> Arc<Product> {
        Arc::new(Product::new(id, format!("ITEM {id}"), 10, 50.0))
    }

    #[test]
    fn test_signature_sorted_triples() {
        let mut placement = Placement::new();
        placement.place(4, product(9), 2);
        placement.place(1, product(3), 6);
        placement.place(4, product(1), 7);

        assert_eq!(
            placement.signature().triples(),
            &[(1, 4, 7), (3, 1, 6), (9, 4, 2)]
        );
    }

    #[test]
    fn test_signature_distinguishes_columns() {
        let p = product(1);
        let mut a = Placement::new();
        a.place(2, Arc::clone(&p), 3);
        let mut b = Placement::new();
        b.place(2, p, 4);
        assert_ne!(a.signature(), b.signature());
    }

    #[test]
    fn test_signature_distinguishes_shelves() {
        let p = product(1);
        let mut a = Placement::new();
        a.place(2, Arc::clone(&p), 3);
        let mut b = Placement::new();
        b.place(5, p, 3);
        assert_ne!(a.signature(), b.signature());
    }

    #[test]
    fn test_empty_signature() {
        assert!(Placement::new().signature().triples().is_empty());
    }

    fn slots() -> impl Strategy<Value = Vec<(u8, u8)>> {
        prop::collection::vec((1..=NUM_SHELVES, 1..=NUM_COLUMNS), 0..40)
    }

    proptest! {
        #[test]
        fn prop_signature_ignores_insertion_order(slots in slots(), rotate in 0usize..40) {
            let entries: Vec<(Arc<Product>, u8, u8)> = slots
                .iter()
                .enumerate()
                .map(|(i, &(shelf, column))| (product(i as u64 + 1), shelf, column))
                .collect();

            let mut forward = Placement::new();
            for (p, shelf, column) in &entries {
                forward.place(*shelf, Arc::clone(p), *column);
            }

            let mut reordered = entries.clone();
            reordered.reverse();
            if !reordered.is_empty() {
                let k = rotate % reordered.len();
                reordered.rotate_left(k);
            }
            let mut backward = Placement::new();
            for (p, shelf, column) in &reordered {
                backward.place(*shelf, Arc::clone(p), *column);
            }

            prop_assert_eq!(forward.signature(), backward.signature());
        }
    }
}
