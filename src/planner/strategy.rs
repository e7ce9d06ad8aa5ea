//! Planning strategies.

use crate::aco::AcoConfig;
use crate::error::PlanError;
use crate::pso::PsoConfig;

/// The search strategy used for one planning request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Exact search maximizing total stars. Exponential in the night count.
    Exhaustive,

    /// Ant Colony Optimizer.
    AntColony(AcoConfig),

    /// Particle Swarm Optimizer.
    ParticleSwarm(PsoConfig),
}

impl Strategy {
    /// Ant colony with default parameters.
    pub fn ant_colony() -> Self {
        Strategy::AntColony(AcoConfig::default())
    }

    /// Particle swarm with default parameters.
    pub fn particle_swarm() -> Self {
        Strategy::ParticleSwarm(PsoConfig::default())
    }

    /// Short identifier used in reports and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Exhaustive => "exhaustive",
            Strategy::AntColony(_) => "ant-colony",
            Strategy::ParticleSwarm(_) => "particle-swarm",
        }
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        match self {
            Strategy::Exhaustive => Ok(()),
            Strategy::AntColony(config) => config.validate(),
            Strategy::ParticleSwarm(config) => config.validate(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Strategy::Exhaustive.name(), "exhaustive");
        assert_eq!(Strategy::ant_colony().name(), "ant-colony");
        assert_eq!(Strategy::particle_swarm().name(), "particle-swarm");
    }

    #[test]
    fn test_validate_delegates() {
        assert!(Strategy::Exhaustive.validate().is_ok());
        assert!(Strategy::AntColony(AcoConfig::default().with_ants(0))
            .validate()
            .is_err());
        assert!(Strategy::ParticleSwarm(PsoConfig::default().with_iterations(0))
            .validate()
            .is_err());
    }
}
