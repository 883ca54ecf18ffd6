//! Run records and method selection.

use std::fmt;
use std::time::SystemTime;

use crate::placement::Placement;

/// Search engine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Method {
    Harmony,
    Tabu,
}

impl Method {
    /// Resolves a caller-supplied method name.
    ///
    /// A missing value selects harmony search. `"harmony"` selects harmony
    /// search; every other value, recognized or not, selects tabu search.
    ///
    /// ```
    /// use shelf_metaheur::optimizer::Method;
    ///
    /// assert_eq!(Method::from_param(None), Method::Harmony);
    /// assert_eq!(Method::from_param(Some("harmony")), Method::Harmony);
    /// assert_eq!(Method::from_param(Some("tabu")), Method::Tabu);
    /// assert_eq!(Method::from_param(Some("Harmony")), Method::Tabu);
    /// ```
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None | Some("harmony") => Self::Harmony,
            Some(_) => Self::Tabu,
        }
    }

    /// Stable lowercase key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Harmony => "harmony",
            Self::Tabu => "tabu",
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Harmony => "Harmony Search",
            Self::Tabu => "Tabu Search",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// History record appended once per optimization.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptimizationRun {
    pub method: Method,
    pub fitness_score: u32,
    /// Wall-clock duration, rounded to hundredths of a second.
    pub elapsed_seconds: f64,
    /// Violation messages joined with newlines.
    pub penalty_log: String,
    pub timestamp: SystemTime,
}

impl fmt::Display for OptimizationRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Fitness: {}",
            self.method.display_name(),
            self.fitness_score
        )
    }
}

/// What [`Optimizer::optimize`](super::Optimizer::optimize) returns.
#[derive(Debug, Clone)]
pub struct OptimizeOutcome {
    pub method: Method,
    pub fitness_score: u32,
    pub penalty_log: Vec<String>,
    pub elapsed_seconds: f64,
    /// The placement that was written to the allocation store.
    pub placement: Placement,
}
