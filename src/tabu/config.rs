//! Tabu Search configuration.

use crate::harmony::NI;

/// Maximum number of signatures kept in the tabu set.
pub const TABU_CAPACITY: usize = 50;

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use shelf_metaheur::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_capacity(20);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_capacity, 20);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of neighbors drawn.
    pub max_iterations: usize,
    /// Maximum size of the tabu set before an arbitrary member is evicted.
    pub tabu_capacity: usize,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: NI,
            tabu_capacity: TABU_CAPACITY,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu set capacity.
    pub fn with_tabu_capacity(mut self, capacity: usize) -> Self {
        self.tabu_capacity = capacity;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.tabu_capacity == 0 {
            return Err("tabu_capacity must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabu_config_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.tabu_capacity, 50);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tabu_config_builder() {
        let config = TabuConfig::default()
            .with_max_iterations(1000)
            .with_tabu_capacity(10)
            .with_seed(123);

        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tabu_capacity, 10);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_tabu_config_rejects_zero_capacity() {
        let no_capacity = TabuConfig::default().with_tabu_capacity(0);
        assert!(no_capacity.validate().is_err());
    }
}
