//! The harmony memory.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::fitness::evaluate;
use crate::placement::Placement;

/// Fixed-size population of placements with their cached penalties.
///
/// The memory is never sorted. Replacement always targets the last
/// position, so its length never changes after construction.
#[derive(Debug, Clone)]
pub struct HarmonyMemory {
    members: Vec<Placement>,
    penalties: Vec<u32>,
}

impl HarmonyMemory {
    /// Builds a memory from placements, scoring each one.
    ///
    /// With the `parallel` feature the scoring runs on the rayon pool.
    pub fn new(members: Vec<Placement>) -> Self {
        #[cfg(feature = "parallel")]
        let penalties = members
            .par_iter()
            .map(|m| evaluate(m).total_penalty)
            .collect();
        #[cfg(not(feature = "parallel"))]
        let penalties = members.iter().map(|m| evaluate(m).total_penalty).collect();

        Self { members, penalties }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &Placement {
        &self.members[index]
    }

    /// Cached penalty of the member at `index`.
    pub fn penalty(&self, index: usize) -> u32 {
        self.penalties[index]
    }

    /// Replaces the last member if `candidate` scores strictly lower.
    ///
    /// Returns `true` if the candidate was stored.
    pub fn consider(&mut self, candidate: Placement, penalty: u32) -> bool {
        match self.penalties.last_mut() {
            Some(last) if penalty < *last => {
                *last = penalty;
                if let Some(slot) = self.members.last_mut() {
                    *slot = candidate;
                }
                true
            }
            _ => false,
        }
    }

    /// Index of the lowest-penalty member; ties go to the earliest one.
    pub fn best_index(&self) -> Option<usize> {
        self.penalties
            .iter()
            .enumerate()
            .min_by_key(|&(_, &penalty)| penalty)
            .map(|(idx, _)| idx)
    }

    /// Penalty of the best member.
    pub fn best_penalty(&self) -> Option<u32> {
        self.penalties.iter().copied().min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Product;
    use std::sync::Arc;

    /// A one-product placement; demand 70 scores 0 on shelf 1 and 5 elsewhere.
    fn scored(id: u64, shelf: u8) -> Placement {
        let mut placement = Placement::new();
        placement.place(shelf, Arc::new(Product::new(id, "ITEM", 1, 70.0)), 1);
        placement
    }

    #[test]
    fn test_new_caches_penalties() {
        let memory = HarmonyMemory::new(vec![scored(1, 1), scored(2, 4)]);
        assert_eq!(memory.len(), 2);
        assert_eq!(memory.penalty(0), 0);
        assert_eq!(memory.penalty(1), 5);
    }

    #[test]
    fn test_consider_targets_last_member_only() {
        // Best member is last-but-one; the last one is the comparison target
        // even though it is not the worst.
        let mut memory = HarmonyMemory::new(vec![scored(1, 3), scored(2, 1), scored(3, 5)]);
        assert!(!memory.consider(scored(4, 6), 5));
        assert_eq!(memory.get(2).shelf(5)[0].product.id, 3);

        assert!(memory.consider(scored(5, 2), 0));
        assert_eq!(memory.len(), 3);
        assert_eq!(memory.penalty(2), 0);
        assert_eq!(memory.get(2).shelf(2)[0].product.id, 5);
        assert_eq!(memory.penalty(0), 5);
    }

    #[test]
    fn test_best_index_prefers_earliest_tie() {
        let memory = HarmonyMemory::new(vec![scored(1, 4), scored(2, 1), scored(3, 2)]);
        assert_eq!(memory.best_index(), Some(1));
        assert_eq!(memory.best_penalty(), Some(0));
    }

    #[test]
    fn test_empty_memory() {
        let mut memory = HarmonyMemory::new(Vec::new());
        assert!(memory.is_empty());
        assert_eq!(memory.best_index(), None);
        assert!(!memory.consider(Placement::new(), 0));
    }
}
