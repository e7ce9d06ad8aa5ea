//! Particle Swarm Optimization (PSO) over lodging indices.
//!
//! Each particle is a vector of catalog indices, one per night, with a
//! parallel velocity vector. Velocities follow the standard
//! inertia/cognitive/social update; the sigmoid of each velocity component
//! is the probability of resampling that night among affordable lodgings.
//! A repair pass after every move pulls particles back within budget.
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Shi & Eberhart (1998), "A Modified Particle Swarm Optimizer"

mod config;
mod particle;
mod runner;

pub use config::PsoConfig;
pub use particle::Particle;
pub use runner::{PsoResult, PsoRunner};
