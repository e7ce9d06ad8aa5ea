//! Request-level planning.
//!
//! A [`PlanRequest`] names a destination, night count, budget and fitness
//! weights. A [`Planner`] turns it into a [`PlanReport`] using one
//! [`Strategy`], or several side by side with [`Planner::compare`].

mod request;
mod runner;
mod strategy;

pub use request::PlanRequest;
pub use runner::{PlanReport, Planner};
pub use strategy::Strategy;
