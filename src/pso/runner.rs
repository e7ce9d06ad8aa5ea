//! PSO execution loop.
//!
//! # Algorithm
//!
//! 1. Initialize each particle with a random budget-feasible assignment;
//!    personal best = itself, global best = best particle
//! 2. At each iteration, for each particle:
//!    a. Update velocity per night and resample nights with probability
//!       `sigmoid(velocity)` (see [`Particle::step`])
//!    b. Repair budget overflows (see [`Particle::repair`])
//!    c. Evaluate; update personal and global bests on improvement
//! 3. Return the best within-budget assignment evaluated during the run
//!
//! Repair can leave a particle over budget when nothing fits, so the swarm's
//! global best may be infeasible. The runner keeps the best within-budget
//! assignment separately; it is what the result and the history report.
//!
//! The sigmoid-of-velocity resampling is a discretization over lodging
//! indices, not a continuous-position PSO.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Kennedy & Eberhart (1997), "A Discrete Binary Version of the Particle
//!   Swarm Algorithm"

use rand::Rng;
use tracing::{debug, info, trace};

use super::config::PsoConfig;
use super::particle::Particle;
use crate::error::PlanError;
use crate::fitness::FitnessEvaluator;
use crate::model::{min_price, Itinerary, Lodging};
use crate::planner::PlanRequest;
use crate::random::rng_from_seed;

/// Result of a PSO run.
#[derive(Debug, Clone, PartialEq)]
pub struct PsoResult {
    /// The best within-budget assignment found. Empty when none exists.
    pub itinerary: Itinerary,

    /// Fitness of the best assignment, `-inf` when empty.
    pub best_fitness: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Best within-budget fitness after initialization and after each
    /// iteration (non-decreasing, `-inf` until one is found).
    pub fitness_history: Vec<f64>,
}

impl PsoResult {
    fn empty() -> Self {
        Self {
            itinerary: Itinerary::empty(),
            best_fitness: f64::NEG_INFINITY,
            iterations: 0,
            fitness_history: Vec::new(),
        }
    }

    /// Whether a within-budget assignment was found.
    pub fn is_feasible(&self) -> bool {
        !self.itinerary.is_empty()
    }
}

/// Executes the Particle Swarm Optimizer.
pub struct PsoRunner;

impl PsoRunner {
    /// Runs PSO with an RNG seeded from `config.seed`.
    pub fn run(
        lodgings: &[Lodging],
        request: &PlanRequest,
        config: &PsoConfig,
    ) -> Result<PsoResult, PlanError> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(lodgings, request, config, &mut rng)
    }

    /// Runs PSO drawing every random decision from `rng`.
    ///
    /// An empty `lodgings` slice, zero particles, or a budget that cannot
    /// pay for the cheapest lodging every night return an empty result.
    /// Zero iterations return the best particle of the initial swarm.
    pub fn run_with_rng<R: Rng>(
        lodgings: &[Lodging],
        request: &PlanRequest,
        config: &PsoConfig,
        rng: &mut R,
    ) -> Result<PsoResult, PlanError> {
        request.validate()?;
        config.check_coefficients()?;

        if lodgings.is_empty() || config.particles == 0 {
            debug!(
                options = lodgings.len(),
                particles = config.particles,
                "degenerate swarm, nothing to evolve"
            );
            return Ok(PsoResult::empty());
        }
        let cheapest_stay = min_price(lodgings)
            .map(|p| std::iter::repeat_n(p, request.nights).sum::<f64>())
            .unwrap_or(0.0);
        if cheapest_stay > request.budget {
            debug!(budget = request.budget, "budget cannot cover the cheapest stay");
            return Ok(PsoResult::empty());
        }

        info!(
            nights = request.nights,
            budget = request.budget,
            options = lodgings.len(),
            particles = config.particles,
            iterations = config.iterations,
            "starting particle swarm"
        );

        let evaluator = FitnessEvaluator::for_pool(lodgings, request.budget, request.weights);
        let mut scratch: Vec<usize> = Vec::with_capacity(lodgings.len());

        let mut swarm: Vec<Particle> = (0..config.particles)
            .map(|_| {
                Particle::random(lodgings, request.nights, request.budget, &mut scratch, rng)
            })
            .collect();
        let mut feasible = FeasibleBest::new();
        for particle in &mut swarm {
            let fitness = evaluator.evaluate_choices(lodgings, &particle.position);
            particle.remember(fitness);
            feasible.offer(lodgings, request.budget, &particle.position, fitness);
        }

        let leader = swarm.iter().enumerate().fold(0, |best, (i, p)| {
            if p.best_fitness > swarm[best].best_fitness {
                i
            } else {
                best
            }
        });
        let mut global_best = swarm[leader].best_position.clone();
        let mut global_fitness = swarm[leader].best_fitness;

        let mut fitness_history = Vec::with_capacity(config.iterations + 1);
        fitness_history.push(feasible.fitness);

        for iteration in 0..config.iterations {
            for particle in &mut swarm {
                particle.step(
                    &global_best,
                    config,
                    lodgings,
                    request.budget,
                    &mut scratch,
                    rng,
                );
                particle.repair(lodgings, request.budget);

                let fitness = evaluator.evaluate_choices(lodgings, &particle.position);
                if particle.remember(fitness) && fitness > global_fitness {
                    debug!(iteration, fitness, "new global best");
                    global_fitness = fitness;
                    global_best.clone_from(&particle.position);
                }
                feasible.offer(lodgings, request.budget, &particle.position, fitness);
            }

            trace!(
                iteration,
                global_fitness,
                feasible_fitness = feasible.fitness,
                "iteration finished"
            );
            fitness_history.push(feasible.fitness);
        }

        let result = PsoResult {
            itinerary: Itinerary::from_choices(lodgings, &feasible.choices),
            best_fitness: feasible.fitness,
            iterations: config.iterations,
            fitness_history,
        };

        info!(
            best_fitness = result.best_fitness,
            feasible = result.is_feasible(),
            "particle swarm finished"
        );

        Ok(result)
    }
}

/// Best within-budget assignment seen so far.
struct FeasibleBest {
    choices: Vec<usize>,
    fitness: f64,
}

impl FeasibleBest {
    fn new() -> Self {
        Self {
            choices: Vec::new(),
            fitness: f64::NEG_INFINITY,
        }
    }

    /// Keeps `position` if it fits `budget` and strictly improves the score.
    fn offer(
        &mut self,
        lodgings: &[Lodging],
        budget: f64,
        position: &[usize],
        fitness: f64,
    ) -> bool {
        if fitness <= self.fitness {
            return false;
        }
        let cost: f64 = position.iter().map(|&i| lodgings[i].price).sum();
        if cost > budget {
            return false;
        }
        self.fitness = fitness;
        self.choices.clear();
        self.choices.extend_from_slice(position);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<Lodging> {
        vec![
            Lodging::new("H1", 3, 50.0, "X"),
            Lodging::new("H2", 4, 80.0, "X"),
            Lodging::new("H3", 5, 150.0, "X"),
        ]
    }

    fn small_config() -> PsoConfig {
        PsoConfig::default()
            .with_particles(10)
            .with_iterations(30)
            .with_seed(42)
    }

    #[test]
    fn test_finds_feasible_assignment() {
        let lodgings = pool();
        let request = PlanRequest::new("X", 2, 160.0);
        let result = PsoRunner::run(&lodgings, &request, &small_config()).unwrap();

        assert!(result.is_feasible());
        assert_eq!(result.itinerary.len(), 2);
        assert!(result.itinerary.total_cost() <= 160.0);
        assert!(result.best_fitness <= request.weights.max_score());
        assert_eq!(result.fitness_history.len(), 31);
    }

    #[test]
    fn test_budget_below_cheapest() {
        let request = PlanRequest::new("X", 2, 30.0);
        let result = PsoRunner::run(&pool(), &request, &small_config()).unwrap();
        assert!(!result.is_feasible());
        assert_eq!(result.best_fitness, f64::NEG_INFINITY);
    }

    #[test]
    fn test_zero_particles_returns_empty() {
        let request = PlanRequest::new("X", 2, 160.0);
        let config = small_config().with_particles(0);
        let result = PsoRunner::run(&pool(), &request, &config).unwrap();
        assert!(!result.is_feasible());
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_zero_iterations_keeps_initial_best() {
        let request = PlanRequest::new("X", 2, 200.0);
        let result =
            PsoRunner::run(&pool(), &request, &small_config().with_iterations(0)).unwrap();
        assert_eq!(result.fitness_history.len(), 1);
        assert!(result.itinerary.total_cost() <= 200.0);
    }

    #[test]
    fn test_same_seed_same_result() {
        let lodgings = pool();
        let request = PlanRequest::new("X", 4, 450.0);
        let a = PsoRunner::run(&lodgings, &request, &small_config()).unwrap();
        let b = PsoRunner::run(&lodgings, &request, &small_config()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_history_non_decreasing() {
        let request = PlanRequest::new("X", 3, 300.0);
        let result = PsoRunner::run(&pool(), &request, &small_config()).unwrap();
        for window in result.fitness_history.windows(2) {
            assert!(window[1] >= window[0]);
        }
        assert_eq!(result.fitness_history.last(), Some(&result.best_fitness));
    }

    #[test]
    fn test_rejects_non_finite_inertia() {
        let request = PlanRequest::new("X", 2, 160.0);
        let config = small_config().with_inertia(f64::NAN);
        assert!(PsoRunner::run(&pool(), &request, &config).is_err());
    }

    #[test]
    fn test_feasible_best_skips_over_budget() {
        let lodgings = pool();
        let mut best = FeasibleBest::new();

        assert!(best.offer(&lodgings, 100.0, &[0, 0], 1.2));
        // Higher score but 300 > 100
        assert!(!best.offer(&lodgings, 100.0, &[2, 2], 2.0));
        assert!(!best.offer(&lodgings, 100.0, &[0, 0], 1.2));

        assert_eq!(best.choices, vec![0, 0]);
        assert!((best.fitness - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_history_ends_at_reported_fitness() {
        // Tight budget: many particles get repaired onto an over-budget index 0
        let lodgings = vec![
            Lodging::new("H3", 5, 150.0, "X"),
            Lodging::new("H1", 3, 50.0, "X"),
            Lodging::new("H2", 4, 80.0, "X"),
        ];
        let request = PlanRequest::new("X", 3, 180.0);
        let result = PsoRunner::run(&lodgings, &request, &small_config()).unwrap();

        assert_eq!(result.fitness_history.last(), Some(&result.best_fitness));
        if result.is_feasible() {
            assert!(result.itinerary.is_within_budget(180.0));
        }
    }

    #[test]
    fn test_fractional_prices_stay_within_budget() {
        let lodgings = vec![
            Lodging::new("A", 2, 7.84, "X"),
            Lodging::new("B", 5, 53.81, "X"),
        ];
        let request = PlanRequest::new("X", 2, 61.65);
        let result = PsoRunner::run(&lodgings, &request, &small_config()).unwrap();

        assert!(result.is_feasible());
        assert!(result.itinerary.is_within_budget(61.65));
        assert_eq!(result.itinerary.choices(), vec![0, 0]);
    }
}
