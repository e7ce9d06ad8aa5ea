//! Fitness evaluation shared by every planning strategy.
//!
//! Higher scores are better. The score combines three normalized terms
//! (rating, cost efficiency, stability), each weighted by [`FitnessWeights`].

mod evaluator;
mod weights;

pub use evaluator::{evaluate, FitnessEvaluator};
pub use weights::{FitnessWeights, Importance};
