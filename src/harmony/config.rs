//! Harmony Search configuration.

/// Harmony memory consideration rate.
pub const HMCR: f64 = 0.8;

/// Pitch adjustment rate.
pub const PAR: f64 = 0.4;

/// Harmony memory size.
pub const HMS: usize = 50;

/// Number of improvisation iterations.
pub const NI: usize = 50;

/// Configuration parameters for Harmony Search.
///
/// The defaults are the production parameters.
///
/// # Examples
///
/// ```
/// use shelf_metaheur::harmony::HarmonyConfig;
///
/// let config = HarmonyConfig::default()
///     .with_iterations(200)
///     .with_seed(42);
/// assert_eq!(config.iterations, 200);
/// assert_eq!(config.memory_size, 50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarmonyConfig {
    /// Number of placements held in the harmony memory.
    pub memory_size: usize,
    /// Number of improvisations.
    pub iterations: usize,
    /// Probability of borrowing a column from memory (0.0–1.0).
    pub hmcr: f64,
    /// Probability of shifting a borrowed column one to the right (0.0–1.0).
    pub par: f64,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for HarmonyConfig {
    fn default() -> Self {
        Self {
            memory_size: HMS,
            iterations: NI,
            hmcr: HMCR,
            par: PAR,
            seed: None,
        }
    }
}

impl HarmonyConfig {
    /// Sets the harmony memory size.
    pub fn with_memory_size(mut self, n: usize) -> Self {
        self.memory_size = n;
        self
    }

    /// Sets the number of improvisations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the memory consideration rate.
    pub fn with_hmcr(mut self, rate: f64) -> Self {
        self.hmcr = rate;
        self
    }

    /// Sets the pitch adjustment rate.
    pub fn with_par(mut self, rate: f64) -> Self {
        self.par = rate;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.memory_size == 0 {
            return Err("memory_size must be at least 1".into());
        }
        if !(0.0..=1.0).contains(&self.hmcr) {
            return Err(format!("hmcr must be in [0, 1], got {}", self.hmcr));
        }
        if !(0.0..=1.0).contains(&self.par) {
            return Err(format!("par must be in [0, 1], got {}", self.par));
        }
        Ok(())
    }
}
