//! Planning entry point.
//!
//! [`Planner`] validates a request, takes a snapshot of the destination's
//! lodgings from the catalog and hands it to the chosen strategy.

use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::info;

use super::request::PlanRequest;
use super::strategy::Strategy;
use crate::aco::AcoRunner;
use crate::catalog::LodgingCatalog;
use crate::error::PlanError;
use crate::fitness::FitnessEvaluator;
use crate::graph::GraphSearch;
use crate::model::{Itinerary, ItineraryStats, Lodging};
use crate::pso::PsoRunner;

/// Outcome of one strategy on one request.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanReport {
    /// Name of the strategy that produced this report.
    pub strategy: &'static str,

    /// The itinerary found; empty when nothing fits the budget.
    pub itinerary: Itinerary,

    /// Fitness of the itinerary under the request's weights, `-inf` when empty.
    ///
    /// Computed for the exhaustive search too, so reports are comparable.
    pub fitness: f64,

    /// Summary figures, `None` when the itinerary is empty.
    pub stats: Option<ItineraryStats>,

    /// Wall time spent in the strategy.
    pub elapsed: Duration,
}

impl PlanReport {
    /// Whether the strategy produced an itinerary.
    pub fn is_feasible(&self) -> bool {
        !self.itinerary.is_empty()
    }
}

/// Plans itineraries against a lodging catalog.
///
/// # Examples
///
/// ```
/// use stay_planner::catalog::InMemoryCatalog;
/// use stay_planner::model::Lodging;
/// use stay_planner::planner::{PlanRequest, Planner, Strategy};
///
/// let catalog = InMemoryCatalog::new(vec![
///     Lodging::new("H1", 3, 50.0, "Varadero"),
///     Lodging::new("H2", 4, 80.0, "Varadero"),
///     Lodging::new("H3", 5, 150.0, "Varadero"),
/// ]);
/// let planner = Planner::new(catalog);
/// let report = planner
///     .plan(&PlanRequest::new("Varadero", 2, 160.0), &Strategy::Exhaustive)
///     .unwrap();
/// assert_eq!(report.stats.unwrap().total_stars, 8);
/// ```
#[derive(Debug, Clone)]
pub struct Planner<C> {
    catalog: C,
}

impl<C: LodgingCatalog> Planner<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Runs one strategy on `request`.
    ///
    /// Fails fast on an invalid request or strategy configuration, when the
    /// catalog has no lodging for the destination, or when one of its prices
    /// is negative or not finite. An itinerary that
    /// cannot fit the budget is not an error: the report is simply empty.
    pub fn plan(
        &self,
        request: &PlanRequest,
        strategy: &Strategy,
    ) -> Result<PlanReport, PlanError> {
        request.validate()?;
        strategy.validate()?;
        let lodgings = self.snapshot(request)?;
        run_strategy(&lodgings, request, strategy)
    }

    /// Runs several strategies on the same request and catalog snapshot.
    ///
    /// Reports come back in the order of `strategies`. With the `parallel`
    /// feature each strategy runs on its own rayon task.
    pub fn compare(
        &self,
        request: &PlanRequest,
        strategies: &[Strategy],
    ) -> Result<Vec<PlanReport>, PlanError> {
        request.validate()?;
        for strategy in strategies {
            strategy.validate()?;
        }
        let lodgings = self.snapshot(request)?;

        #[cfg(feature = "parallel")]
        let reports = strategies
            .par_iter()
            .map(|s| run_strategy(&lodgings, request, s))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let reports = strategies
            .iter()
            .map(|s| run_strategy(&lodgings, request, s))
            .collect();

        reports
    }

    fn snapshot(&self, request: &PlanRequest) -> Result<Vec<Lodging>, PlanError> {
        let lodgings = self.catalog.get_lodgings(&request.destination);
        if lodgings.is_empty() {
            return Err(PlanError::EmptyCatalog {
                destination: request.destination.clone(),
            });
        }
        if let Some(bad) = lodgings.iter().find(|l| !l.has_valid_price()) {
            return Err(PlanError::InvalidPrice {
                name: bad.name.clone(),
                price: bad.price,
            });
        }
        Ok(lodgings)
    }
}

fn run_strategy(
    lodgings: &[Lodging],
    request: &PlanRequest,
    strategy: &Strategy,
) -> Result<PlanReport, PlanError> {
    let started = Instant::now();

    let (itinerary, fitness) = match strategy {
        Strategy::Exhaustive => match GraphSearch::run(lodgings, request)? {
            Some(result) => {
                let evaluator =
                    FitnessEvaluator::for_pool(lodgings, request.budget, request.weights);
                let fitness = evaluator.evaluate(&result.itinerary);
                (result.itinerary, fitness)
            }
            None => (Itinerary::empty(), f64::NEG_INFINITY),
        },
        Strategy::AntColony(config) => {
            let result = AcoRunner::run(lodgings, request, config)?;
            (result.itinerary, result.best_fitness)
        }
        Strategy::ParticleSwarm(config) => {
            let result = PsoRunner::run(lodgings, request, config)?;
            (result.itinerary, result.best_fitness)
        }
    };

    let elapsed = started.elapsed();
    let stats = (!itinerary.is_empty()).then(|| itinerary.stats(request.budget));

    info!(
        strategy = strategy.name(),
        destination = %request.destination,
        fitness,
        feasible = stats.is_some(),
        elapsed_ms = elapsed.as_millis() as u64,
        "plan finished"
    );

    Ok(PlanReport {
        strategy: strategy.name(),
        itinerary,
        fitness,
        stats,
        elapsed,
    })
}
