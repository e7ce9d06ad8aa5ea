//! Exhaustive graph search.
//!
//! Explores every budget-feasible night-by-night assignment with an
//! explicit stack and returns the one with the highest star total. Exact
//! but exponential in the night count; use it for short trips or as a
//! reference bound for the metaheuristics.

mod node;
mod runner;

pub use node::SearchNode;
pub use runner::{GraphResult, GraphSearch};
