//! Orchestrator configuration.

use crate::harmony::HarmonyConfig;
use crate::tabu::TabuConfig;

/// Engine parameters used by [`Optimizer`](super::Optimizer).
///
/// The default carries the production parameters for both engines. Callers
/// of the orchestrator can only change the seed.
#[derive(Debug, Clone, Default)]
pub(crate) struct OptimizerConfig {
    pub(crate) harmony: HarmonyConfig,
    pub(crate) tabu: TabuConfig,
}

impl OptimizerConfig {
    /// Replaces the Harmony Search parameters.
    #[cfg(test)]
    pub(crate) fn with_harmony(mut self, harmony: HarmonyConfig) -> Self {
        self.harmony = harmony;
        self
    }

    /// Replaces the Tabu Search parameters.
    #[cfg(test)]
    pub(crate) fn with_tabu(mut self, tabu: TabuConfig) -> Self {
        self.tabu = tabu;
        self
    }

    /// Seeds both engines.
    pub(crate) fn with_seed(mut self, seed: u64) -> Self {
        self.harmony.seed = Some(seed);
        self.tabu.seed = Some(seed);
        self
    }

    /// Validates both engine configurations.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if let Err(e) = self.harmony.validate() {
            return Err(format!("harmony: {e}"));
        }
        self.tabu.validate().map_err(|e| format!("tabu: {e}"))
    }
}
