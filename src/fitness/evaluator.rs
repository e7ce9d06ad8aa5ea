//! Itinerary fitness.
//!
//! ```text
//! stars_norm   = total_stars / (nights * max_rating)      (0 if max_rating = 0)
//! cost_norm    = min(total_cost / budget, 1)               (1 if budget <= 0)
//! changes_norm = changes / (nights - 1)                    (0 if nights <= 1)
//! score        = alpha * stars_norm + beta * (1 - cost_norm) + gamma * (1 - changes_norm)
//! ```
//!
//! An empty itinerary scores `-inf`. Both metaheuristics score candidates
//! through [`FitnessEvaluator`] so their results are directly comparable.

use super::weights::FitnessWeights;
use crate::model::{max_rating, Itinerary, Lodging};

/// Scores itineraries against a fixed rating scale, budget and weights.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessEvaluator {
    max_rating: u32,
    budget: f64,
    weights: FitnessWeights,
}

impl FitnessEvaluator {
    pub fn new(max_rating: u32, budget: f64, weights: FitnessWeights) -> Self {
        Self {
            max_rating,
            budget,
            weights,
        }
    }

    /// Evaluator whose rating scale is the best rating in `lodgings`.
    pub fn for_pool(lodgings: &[Lodging], budget: f64, weights: FitnessWeights) -> Self {
        Self::new(max_rating(lodgings), budget, weights)
    }

    pub fn max_rating(&self) -> u32 {
        self.max_rating
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn weights(&self) -> &FitnessWeights {
        &self.weights
    }

    /// Scores a materialized itinerary.
    pub fn evaluate(&self, itinerary: &Itinerary) -> f64 {
        self.score(
            itinerary.len(),
            itinerary.total_stars(),
            itinerary.total_cost(),
            itinerary.changes(),
        )
    }

    /// Scores a vector of catalog indices without building an itinerary.
    ///
    /// # Panics
    /// Panics if an index is out of bounds for `lodgings`.
    pub fn evaluate_choices(&self, lodgings: &[Lodging], choices: &[usize]) -> f64 {
        let mut stars = 0u32;
        let mut cost = 0.0;
        for &i in choices {
            stars += lodgings[i].stars;
            cost += lodgings[i].price;
        }
        let changes = choices.windows(2).filter(|w| w[0] != w[1]).count();
        self.score(choices.len(), stars, cost, changes)
    }

    fn score(&self, nights: usize, total_stars: u32, total_cost: f64, changes: usize) -> f64 {
        if nights == 0 {
            return f64::NEG_INFINITY;
        }

        let stars_norm = if self.max_rating > 0 {
            total_stars as f64 / (nights as f64 * self.max_rating as f64)
        } else {
            0.0
        };
        let cost_norm = if self.budget > 0.0 {
            (total_cost / self.budget).min(1.0)
        } else {
            1.0
        };
        let changes_norm = if nights > 1 {
            changes as f64 / (nights - 1) as f64
        } else {
            0.0
        };

        let w = &self.weights;
        w.alpha * stars_norm + w.beta * (1.0 - cost_norm) + w.gamma * (1.0 - changes_norm)
    }
}

/// Scores `itinerary`; shorthand for [`FitnessEvaluator::evaluate`].
pub fn evaluate(
    itinerary: &Itinerary,
    max_rating: u32,
    budget: f64,
    weights: &FitnessWeights,
) -> f64 {
    FitnessEvaluator::new(max_rating, budget, *weights).evaluate(itinerary)
}
