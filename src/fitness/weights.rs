//! Fitness weights and preference presets.

use crate::error::{ensure_finite, PlanError};

/// Weights of the three fitness terms.
///
/// - `alpha`: star rating
/// - `beta`: cost efficiency (spending less of the budget)
/// - `gamma`: stability (fewer lodging changes)
///
/// The score of any itinerary is bounded above by `alpha + beta + gamma`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessWeights {
    pub alpha: f64,
    pub beta: f64,
    pub gamma: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl FitnessWeights {
    pub fn new(alpha: f64, beta: f64, gamma: f64) -> Self {
        Self { alpha, beta, gamma }
    }

    /// Translates qualitative traveler preferences into weights.
    ///
    /// ```
    /// use stay_planner::fitness::{FitnessWeights, Importance};
    ///
    /// let w = FitnessWeights::from_preferences(
    ///     Importance::VeryHigh,
    ///     Importance::Medium,
    ///     Importance::Low,
    /// );
    /// assert_eq!(w, FitnessWeights::new(5.0, 1.0, 0.5));
    /// ```
    pub fn from_preferences(stars: Importance, budget: Importance, stability: Importance) -> Self {
        Self::new(stars.weight(), budget.weight(), stability.weight())
    }

    /// Upper bound of the fitness score under these weights.
    pub fn max_score(&self) -> f64 {
        self.alpha + self.beta + self.gamma
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        ensure_finite("alpha", self.alpha)?;
        ensure_finite("beta", self.beta)?;
        ensure_finite("gamma", self.gamma)?;
        Ok(())
    }
}

/// How much a traveler cares about one fitness term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Importance {
    /// "I don't care".
    VeryLow,
    Low,
    #[default]
    Medium,
    High,
    /// "Only the best will do".
    VeryHigh,
}

impl Importance {
    pub fn weight(self) -> f64 {
        match self {
            Importance::VeryLow => 0.1,
            Importance::Low => 0.5,
            Importance::Medium => 1.0,
            Importance::High => 2.5,
            Importance::VeryHigh => 5.0,
        }
    }
}
