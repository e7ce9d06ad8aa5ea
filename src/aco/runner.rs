//! ACO execution loop.
//!
//! # Algorithm
//!
//! 1. Set every pheromone cell to 1.0
//! 2. At each iteration:
//!    a. Every ant builds a tour night by night, picking among affordable
//!       lodgings with probability proportional to
//!       `pheromone * stars / price`, discounted when the lodging differs
//!       from the previous night. A tour stops early when nothing is affordable.
//!    b. Score every tour with the shared fitness function
//!    c. Evaporate all trails, then deposit each tour's score on its cells
//!    d. Keep the best complete tour seen so far. Partial tours still
//!       deposit pheromone but are never returned.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::AcoConfig;
use super::pheromone::PheromoneMatrix;
use crate::error::PlanError;
use crate::fitness::FitnessEvaluator;
use crate::model::{Itinerary, Lodging};
use crate::planner::PlanRequest;
use crate::random::rng_from_seed;

/// Heuristic discount applied to a lodging that differs from the previous night.
const CHANGE_DISCOUNT: f64 = 0.8;

/// Initial level of every pheromone cell.
const INITIAL_PHEROMONE: f64 = 1.0;

/// Result of an ACO run.
#[derive(Debug, Clone, PartialEq)]
pub struct AcoResult {
    /// The best complete tour found. Empty when no ant completed a tour.
    pub itinerary: Itinerary,

    /// Fitness of the best tour, `-inf` when empty.
    pub best_fitness: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Best fitness after each iteration (non-decreasing).
    pub fitness_history: Vec<f64>,
}

impl AcoResult {
    fn empty() -> Self {
        Self {
            itinerary: Itinerary::empty(),
            best_fitness: f64::NEG_INFINITY,
            iterations: 0,
            fitness_history: Vec::new(),
        }
    }

    /// Whether a tour was found.
    pub fn is_feasible(&self) -> bool {
        !self.itinerary.is_empty()
    }
}

/// Executes the Ant Colony Optimizer.
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO with an RNG seeded from `config.seed`.
    pub fn run(
        lodgings: &[Lodging],
        request: &PlanRequest,
        config: &AcoConfig,
    ) -> Result<AcoResult, PlanError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(lodgings, request, config, &mut rng)
    }

    /// Runs ACO drawing every random decision from `rng`.
    ///
    /// An empty `lodgings` slice, zero ants or zero iterations return an
    /// empty result without constructing any tour.
    ///
    /// # Examples
    ///
    /// ```
    /// use stay_planner::aco::{AcoConfig, AcoRunner};
    /// use stay_planner::model::Lodging;
    /// use stay_planner::planner::PlanRequest;
    /// use stay_planner::random::create_rng;
    ///
    /// let lodgings = vec![
    ///     Lodging::new("H1", 3, 50.0, "X"),
    ///     Lodging::new("H2", 4, 80.0, "X"),
    /// ];
    /// let request = PlanRequest::new("X", 2, 160.0);
    /// let config = AcoConfig::default().with_ants(10).with_iterations(20);
    /// let result = AcoRunner::run_with_rng(&lodgings, &request, &config, &mut create_rng(7)).unwrap();
    /// assert!(result.itinerary.total_cost() <= 160.0);
    /// ```
    pub fn run_with_rng<R: Rng>(
        lodgings: &[Lodging],
        request: &PlanRequest,
        config: &AcoConfig,
        rng: &mut R,
    ) -> Result<AcoResult, PlanError> {
        request.validate()?;
        config.check_evaporation_rate()?;

        if lodgings.is_empty() || config.ants == 0 || config.iterations == 0 {
            debug!(
                options = lodgings.len(),
                ants = config.ants,
                iterations = config.iterations,
                "degenerate colony, nothing to construct"
            );
            return Ok(AcoResult::empty());
        }

        info!(
            nights = request.nights,
            budget = request.budget,
            options = lodgings.len(),
            ants = config.ants,
            iterations = config.iterations,
            evaporation_rate = config.evaporation_rate,
            "starting ant colony"
        );

        let evaluator = FitnessEvaluator::for_pool(lodgings, request.budget, request.weights);
        let mut pheromone =
            PheromoneMatrix::new(request.nights, lodgings.len(), INITIAL_PHEROMONE);

        let mut best_tour: Vec<usize> = Vec::new();
        let mut best_fitness = f64::NEG_INFINITY;
        let mut fitness_history = Vec::with_capacity(config.iterations);

        let mut tours: Vec<Vec<usize>> = Vec::with_capacity(config.ants);
        let mut scores: Vec<f64> = Vec::with_capacity(config.ants);
        let mut weights: Vec<f64> = Vec::with_capacity(lodgings.len());

        for iteration in 0..config.iterations {
            tours.clear();
            scores.clear();

            for _ in 0..config.ants {
                let tour = construct_tour(
                    lodgings,
                    &pheromone,
                    request.budget,
                    &mut weights,
                    rng,
                );
                let score = evaluator.evaluate_choices(lodgings, &tour);
                if tour.len() == request.nights && score > best_fitness {
                    debug!(iteration, score, nights = tour.len(), "new best tour");
                    best_fitness = score;
                    best_tour.clone_from(&tour);
                }
                tours.push(tour);
                scores.push(score);
            }

            pheromone.evaporate(config.evaporation_rate);
            for (tour, &score) in tours.iter().zip(&scores) {
                pheromone.deposit(tour, score);
            }

            trace!(iteration, best_fitness, "iteration finished");
            fitness_history.push(best_fitness);
        }

        info!(
            best_fitness,
            nights = best_tour.len(),
            "ant colony finished"
        );

        Ok(AcoResult {
            itinerary: Itinerary::from_choices(lodgings, &best_tour),
            best_fitness,
            iterations: config.iterations,
            fitness_history,
        })
    }
}

/// Builds one ant's tour. Stops at the first night with no affordable lodging.
fn construct_tour<R: Rng>(
    lodgings: &[Lodging],
    pheromone: &PheromoneMatrix,
    budget: f64,
    weights: &mut Vec<f64>,
    rng: &mut R,
) -> Vec<usize> {
    let mut tour = Vec::with_capacity(pheromone.nights());
    let mut spent = 0.0;
    let mut previous: Option<usize> = None;

    for night in 0..pheromone.nights() {
        let total = selection_weights(
            lodgings,
            pheromone.row(night),
            spent,
            budget,
            previous,
            weights,
        );
        if total <= 0.0 || !total.is_finite() {
            break;
        }

        let pick = roulette(weights, total, rng);
        spent += lodgings[pick].price;
        tour.push(pick);
        previous = Some(pick);
    }

    tour
}

/// Fills `weights` with each lodging's selection weight for one night and
/// returns their sum.
///
/// The weight is `trail * stars / price`, discounted by [`CHANGE_DISCOUNT`]
/// when the lodging differs from `previous`. Lodgings with
/// `spent + price > budget` and free lodgings weigh 0.
fn selection_weights(
    lodgings: &[Lodging],
    trail: &[f64],
    spent: f64,
    budget: f64,
    previous: Option<usize>,
    weights: &mut Vec<f64>,
) -> f64 {
    weights.clear();
    let mut total = 0.0;

    for (i, lodging) in lodgings.iter().enumerate() {
        let weight = if spent + lodging.price > budget {
            0.0
        } else {
            let mut heuristic = if lodging.price > 0.0 {
                lodging.stars as f64 / lodging.price
            } else {
                0.0
            };
            if previous.is_some_and(|p| p != i) {
                heuristic *= CHANGE_DISCOUNT;
            }
            trail[i] * heuristic
        };
        total += weight;
        weights.push(weight);
    }

    total
}

/// Roulette-wheel selection over non-negative weights summing to `total`.
///
/// Never returns a zero-weight index.
fn roulette<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let r = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    let mut last_positive = 0;
    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        last_positive = i;
        if r < cumulative {
            return i;
        }
    }
    last_positive
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn pool() -> Vec<Lodging> {
        vec![
            Lodging::new("H1", 3, 50.0, "X"),
            Lodging::new("H2", 4, 80.0, "X"),
            Lodging::new("H3", 5, 150.0, "X"),
        ]
    }

    fn small_config() -> AcoConfig {
        AcoConfig::default().with_ants(12).with_iterations(30).with_seed(42)
    }

    #[test]
    fn test_finds_feasible_tour() {
        let lodgings = pool();
        let request = PlanRequest::new("X", 2, 160.0);
        let result = AcoRunner::run(&lodgings, &request, &small_config()).unwrap();

        assert!(result.is_feasible());
        assert_eq!(result.itinerary.len(), 2);
        assert!(result.itinerary.total_cost() <= 160.0);
        assert!(result.best_fitness.is_finite());
        assert!(result.best_fitness <= request.weights.max_score());
        assert_eq!(result.fitness_history.len(), 30);
    }

    #[test]
    fn test_budget_below_cheapest() {
        let request = PlanRequest::new("X", 2, 30.0);
        let result = AcoRunner::run(&pool(), &request, &small_config()).unwrap();
        assert!(!result.is_feasible());
        assert_eq!(result.best_fitness, f64::NEG_INFINITY);
    }

    #[test]
    fn test_zero_ants_returns_empty() {
        let request = PlanRequest::new("X", 2, 160.0);
        let config = small_config().with_ants(0);
        let result = AcoRunner::run(&pool(), &request, &config).unwrap();
        assert!(!result.is_feasible());
        assert_eq!(result.iterations, 0);
        assert!(result.fitness_history.is_empty());
    }

    #[test]
    fn test_zero_iterations_returns_empty() {
        let request = PlanRequest::new("X", 2, 160.0);
        let config = small_config().with_iterations(0);
        let result = AcoRunner::run(&pool(), &request, &config).unwrap();
        assert_eq!(result.best_fitness, f64::NEG_INFINITY);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_empty_pool_returns_empty() {
        let request = PlanRequest::new("X", 2, 160.0);
        let result = AcoRunner::run(&[], &request, &small_config()).unwrap();
        assert!(!result.is_feasible());
    }

    #[test]
    fn test_rejects_bad_evaporation() {
        let request = PlanRequest::new("X", 2, 160.0);
        let config = small_config().with_evaporation_rate(-0.1);
        assert_eq!(
            AcoRunner::run(&pool(), &request, &config),
            Err(PlanError::InvalidEvaporationRate(-0.1))
        );
    }

    #[test]
    fn test_same_seed_same_result() {
        let lodgings = pool();
        let request = PlanRequest::new("X", 3, 300.0);
        let a = AcoRunner::run(&lodgings, &request, &small_config()).unwrap();
        let b = AcoRunner::run(&lodgings, &request, &small_config()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_history_non_decreasing() {
        let request = PlanRequest::new("X", 4, 400.0);
        let result = AcoRunner::run(&pool(), &request, &small_config()).unwrap();
        for window in result.fitness_history.windows(2) {
            assert!(window[1] >= window[0]);
        }
        assert_eq!(result.fitness_history.last(), Some(&result.best_fitness));
    }

    #[test]
    fn test_construct_stops_when_budget_runs_out() {
        let lodgings = pool();
        let pheromone = PheromoneMatrix::new(5, lodgings.len(), 1.0);
        let mut weights = Vec::new();
        let mut rng = create_rng(3);
        // 120 buys at most two nights
        let tour = construct_tour(&lodgings, &pheromone, 120.0, &mut weights, &mut rng);
        assert!(!tour.is_empty() && tour.len() <= 2);
        let cost: f64 = tour.iter().map(|&i| lodgings[i].price).sum();
        assert!(cost <= 120.0);
    }

    #[test]
    fn test_selection_weights_first_night() {
        let lodgings = pool();
        let mut weights = Vec::new();
        let total = selection_weights(&lodgings, &[1.0, 2.0, 0.5], 0.0, 160.0, None, &mut weights);

        // H3 costs 150 and fits; no previous night means no discount
        assert_eq!(weights, vec![3.0 / 50.0, 2.0 * (4.0 / 80.0), 0.5 * (5.0 / 150.0)]);
        assert!((total - weights.iter().sum::<f64>()).abs() < 1e-15);
    }

    #[test]
    fn test_selection_weights_discount_changes() {
        let lodgings = pool();
        let mut weights = Vec::new();
        selection_weights(&lodgings, &[1.0, 1.0, 1.0], 50.0, 160.0, Some(1), &mut weights);

        // 50 spent leaves room for H1 and H2 only; staying at H2 is undiscounted
        assert_eq!(weights, vec![3.0 / 50.0 * 0.8, 4.0 / 80.0, 0.0]);
    }

    #[test]
    fn test_selection_weights_free_and_unaffordable_are_zero() {
        let lodgings = vec![
            Lodging::new("Free", 2, 0.0, "X"),
            Lodging::new("A", 2, 7.84, "X"),
            Lodging::new("B", 5, 53.81, "X"),
        ];
        let mut weights = Vec::new();
        // 7.84 + 53.81 lands one ulp above 61.65
        let total = selection_weights(&lodgings, &[1.0; 3], 7.84, 61.65, Some(1), &mut weights);

        assert_eq!(weights, vec![0.0, 2.0 / 7.84, 0.0]);
        assert_eq!(total, 2.0 / 7.84);
    }

    #[test]
    fn test_tours_stay_within_budget_with_fractional_prices() {
        let lodgings = vec![
            Lodging::new("A", 2, 7.84, "X"),
            Lodging::new("B", 5, 53.81, "X"),
        ];
        let request = PlanRequest::new("X", 2, 61.65);
        let result = AcoRunner::run(&lodgings, &request, &small_config()).unwrap();

        assert!(result.is_feasible());
        assert!(result.itinerary.is_within_budget(61.65));
        assert_eq!(result.itinerary.choices(), vec![0, 0]);
    }

    #[test]
    fn test_roulette_skips_zero_weights() {
        let mut rng = create_rng(11);
        for _ in 0..200 {
            let pick = roulette(&[0.0, 2.0, 0.0, 1.0, 0.0], 3.0, &mut rng);
            assert!(pick == 1 || pick == 3);
        }
    }
}
