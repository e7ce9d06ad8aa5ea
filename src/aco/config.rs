//! ACO configuration.

use crate::error::PlanError;

/// Configuration for the Ant Colony Optimizer.
///
/// Defaults are the values found by tuning on real lodging catalogs.
///
/// # Examples
///
/// ```
/// use stay_planner::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ants(20)
///     .with_iterations(100)
///     .with_evaporation_rate(0.3)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants constructing an itinerary each iteration.
    pub ants: usize,

    /// Number of construct/evaporate/deposit cycles.
    pub iterations: usize,

    /// Fraction of pheromone removed each iteration, in [0, 1].
    pub evaporation_rate: f64,

    /// Random seed for reproducibility. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            ants: 48,
            iterations: 300,
            evaporation_rate: 0.12,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_ants(mut self, n: usize) -> Self {
        self.ants = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration, including positive ant and iteration counts.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.ants == 0 {
            return Err(PlanError::InvalidCount { name: "ants" });
        }
        if self.iterations == 0 {
            return Err(PlanError::InvalidCount { name: "iterations" });
        }
        self.check_evaporation_rate()
    }

    pub(crate) fn check_evaporation_rate(&self) -> Result<(), PlanError> {
        if (0.0..=1.0).contains(&self.evaporation_rate) {
            Ok(())
        } else {
            Err(PlanError::InvalidEvaporationRate(self.evaporation_rate))
        }
    }
}
