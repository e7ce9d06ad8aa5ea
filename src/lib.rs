//! Lodging itinerary optimization.
//!
//! Assigns one lodging to each night of a trip so that the total stays
//! within budget while a composite quality score is maximized. Three
//! interchangeable strategies consume the same lodging catalog:
//!
//! - **Exhaustive graph search**: explicit-stack depth-first search over
//!   every budget-feasible assignment, maximizing total stars.
//! - **Ant Colony Optimization (ACO)**: pheromone-guided probabilistic
//!   construction scored by the shared fitness function.
//! - **Particle Swarm Optimization (PSO)**: index-vector particles with
//!   sigmoid-driven resampling and a budget repair pass.
//!
//! The fitness function ([`fitness`]) rewards star rating, cost efficiency
//! and stability (few lodging changes), each with its own weight.
//!
//! # Architecture
//!
//! Every run is single-threaded and owns its working state (search stack,
//! pheromone matrix, swarm). Runs share only the read-only lodging slice,
//! so independent requests can execute on separate threads. All randomness
//! flows through an explicit, seedable RNG.
//!
//! Infeasibility is data, not an error: the graph search returns `None`
//! and the metaheuristics return an empty itinerary scored `-inf`.
//! [`error::PlanError`] is reserved for invalid configuration.

pub mod aco;
pub mod catalog;
pub mod error;
pub mod fitness;
pub mod graph;
pub mod model;
pub mod planner;
pub mod pso;
pub mod random;

pub use error::PlanError;
