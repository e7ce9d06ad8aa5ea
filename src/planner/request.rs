//! Planning requests.

use crate::error::PlanError;
use crate::fitness::FitnessWeights;

/// What the traveler asked for.
///
/// # Examples
///
/// ```
/// use stay_planner::fitness::FitnessWeights;
/// use stay_planner::planner::PlanRequest;
///
/// let request = PlanRequest::new("Varadero", 5, 800.0)
///     .with_weights(FitnessWeights::new(2.5, 1.0, 1.0));
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Destination whose lodgings are considered.
    pub destination: String,

    /// Number of nights to assign.
    pub nights: usize,

    /// Total budget for all nights.
    pub budget: f64,

    /// Fitness weights used by the metaheuristics and for reporting.
    pub weights: FitnessWeights,
}

impl PlanRequest {
    pub fn new(destination: impl Into<String>, nights: usize, budget: f64) -> Self {
        Self {
            destination: destination.into(),
            nights,
            budget,
            weights: FitnessWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Validates night count, budget and weights.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.nights == 0 {
            return Err(PlanError::InvalidNights(self.nights));
        }
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(PlanError::InvalidBudget(self.budget));
        }
        self.weights.validate()
    }
}
