//! Ant Colony Optimization (ACO).
//!
//! A population of ants repeatedly builds itineraries night by night,
//! guided by a pheromone matrix that rewards (night, lodging) pairs used
//! by well-scoring itineraries and by a greedy stars-per-price heuristic.
//! Trails evaporate every iteration so early choices do not dominate.
//!
//! Each run owns its pheromone matrix; concurrent runs share nothing but
//! the read-only lodging slice.
//!
//! # References
//!
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod config;
mod pheromone;
mod runner;

pub use config::AcoConfig;
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoRunner};
