//! Bounded set of forbidden placement signatures.

use std::collections::HashSet;

use rand::Rng;

use crate::placement::SolutionSignature;

/// Set of signatures with a capacity bound.
///
/// When an insertion pushes the set past its capacity, one member chosen
/// uniformly at random is evicted. No ordering (insertion age, fitness) is
/// implied; drawing the victim from the run's generator keeps seeded runs
/// reproducible.
#[derive(Debug, Clone)]
pub struct TabuSet {
    capacity: usize,
    members: Vec<SolutionSignature>,
    lookup: HashSet<SolutionSignature>,
}

impl TabuSet {
    /// Creates an empty set holding at most `capacity` signatures.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            members: Vec::with_capacity(capacity + 1),
            lookup: HashSet::with_capacity(capacity + 1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, signature: &SolutionSignature) -> bool {
        self.lookup.contains(signature)
    }

    /// Inserts a signature, evicting an arbitrary member on overflow.
    ///
    /// Returns the evicted signature, if any. Inserting a signature already
    /// present changes nothing.
    pub fn insert<R: Rng>(
        &mut self,
        signature: SolutionSignature,
        rng: &mut R,
    ) -> Option<SolutionSignature> {
        if !self.lookup.insert(signature.clone()) {
            return None;
        }
        self.members.push(signature);

        if self.members.len() > self.capacity {
            let index = rng.random_range(0..self.members.len());
            let victim = self.members.swap_remove(index);
            self.lookup.remove(&victim);
            return Some(victim);
        }
        None
    }
}
