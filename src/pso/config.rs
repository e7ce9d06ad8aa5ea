//! PSO configuration.

use crate::error::{ensure_finite, PlanError};

/// Configuration for the Particle Swarm Optimizer.
///
/// # Examples
///
/// ```
/// use stay_planner::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_particles(30)
///     .with_iterations(100)
///     .with_inertia(0.5)
///     .with_coefficients(2.0, 2.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Swarm size.
    pub particles: usize,

    /// Number of swarm updates.
    pub iterations: usize,

    /// Inertia weight `w`: how much of the previous velocity is kept.
    pub inertia: f64,

    /// Cognitive coefficient `c1`: pull towards the particle's own best.
    pub cognitive: f64,

    /// Social coefficient `c2`: pull towards the swarm's best.
    pub social: f64,

    /// Random seed for reproducibility. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            particles: 42,
            iterations: 300,
            inertia: 0.7,
            cognitive: 1.5,
            social: 1.5,
            seed: None,
        }
    }
}

impl PsoConfig {
    pub fn with_particles(mut self, n: usize) -> Self {
        self.particles = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_inertia(mut self, w: f64) -> Self {
        self.inertia = w;
        self
    }

    /// Sets the cognitive (`c1`) and social (`c2`) coefficients.
    pub fn with_coefficients(mut self, cognitive: f64, social: f64) -> Self {
        self.cognitive = cognitive;
        self.social = social;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration, including positive particle and iteration counts.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.particles == 0 {
            return Err(PlanError::InvalidCount { name: "particles" });
        }
        if self.iterations == 0 {
            return Err(PlanError::InvalidCount { name: "iterations" });
        }
        self.check_coefficients()
    }

    pub(crate) fn check_coefficients(&self) -> Result<(), PlanError> {
        ensure_finite("inertia", self.inertia)?;
        ensure_finite("cognitive", self.cognitive)?;
        ensure_finite("social", self.social)
    }
}
