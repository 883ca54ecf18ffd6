//! Scoring results.

use std::fmt;

/// Demand band of a product, deciding which shelves are acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemandBand {
    /// `60 ≤ demand ≤ 80`, belongs on shelves 1-2.
    Average,
    /// `demand > 90`, belongs on shelves 3-5.
    High,
    /// `demand < 60`, belongs on shelves 6-7.
    Low,
}

impl DemandBand {
    /// Classifies a demand percentage.
    ///
    /// Returns `None` for `80 < demand ≤ 90` (and NaN), which no rule covers.
    pub fn classify(demand: f64) -> Option<Self> {
        if (60.0..=80.0).contains(&demand) {
            Some(Self::Average)
        } else if demand > 90.0 {
            Some(Self::High)
        } else if demand < 60.0 {
            Some(Self::Low)
        } else {
            None
        }
    }

    /// Shelves on which a product of this band incurs no penalty.
    pub fn shelves(self) -> &'static [u8] {
        match self {
            Self::Average => &[1, 2],
            Self::High => &[3, 4, 5],
            Self::Low => &[6, 7],
        }
    }

    /// Penalty for placing a product of this band elsewhere.
    pub fn penalty(self) -> u32 {
        match self {
            Self::Average => 5,
            Self::High => 7,
            Self::Low => 5,
        }
    }

    /// Short label used in log lines.
    pub fn label(self) -> &'static str {
        match self {
            Self::Average => "avg",
            Self::High => "high",
            Self::Low => "low",
        }
    }

    /// Shelf range as shown in log lines, e.g. `"3-5"`.
    pub fn shelf_range(self) -> &'static str {
        match self {
            Self::Average => "1-2",
            Self::High => "3-5",
            Self::Low => "6-7",
        }
    }
}

/// One rule violation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PenaltyEntry {
    pub message: String,
    pub amount: u32,
}

impl fmt::Display for PenaltyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of scoring a placement. Lower is better.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessResult {
    pub total_penalty: u32,
    /// Violations in shelf order, then in-shelf order.
    pub log: Vec<PenaltyEntry>,
}

impl FitnessResult {
    /// Qualitative classification of the total penalty.
    pub fn remark(&self) -> QualityRemark {
        QualityRemark::classify(self.total_penalty)
    }

    /// Log messages without amounts.
    pub fn messages(&self) -> Vec<String> {
        self.log.iter().map(|e| e.message.clone()).collect()
    }
}

/// Diagnostic tier of a total penalty. Has no effect on search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityRemark {
    Perfect,
    Excellent,
    Good,
    NeedsImprovement,
}

impl QualityRemark {
    /// `0` is perfect, up to 15 excellent, up to 30 good.
    pub fn classify(total_penalty: u32) -> Self {
        match total_penalty {
            0 => Self::Perfect,
            1..=15 => Self::Excellent,
            16..=30 => Self::Good,
            _ => Self::NeedsImprovement,
        }
    }
}

impl fmt::Display for QualityRemark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Perfect => "Perfect",
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::NeedsImprovement => "Needs Improvement",
        };
        f.write_str(s)
    }
}
