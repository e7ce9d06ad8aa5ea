//! Exhaustive search execution.
//!
//! # Algorithm
//!
//! 1. Push one node per lodging affordable with the full budget (night 1)
//! 2. Pop a node:
//!    a. complete (night == nights): keep it if its star total is strictly
//!       greater than the best complete node so far
//!    b. otherwise push one child per lodging affordable with the node's
//!       remaining budget
//! 3. Stop when the stack is empty
//!
//! Every budget-feasible assignment is visited, so the star total of the
//! result bounds what any other strategy can reach.

use tracing::{debug, info};

use super::node::SearchNode;
use crate::error::PlanError;
use crate::model::{Itinerary, Lodging};
use crate::planner::PlanRequest;

/// Result of an exhaustive search.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphResult {
    /// The itinerary with the highest star total.
    pub itinerary: Itinerary,

    /// Star total of the itinerary.
    pub total_stars: u32,

    /// Budget left after paying for every night.
    pub budget_left: f64,

    /// Number of nodes popped from the stack.
    pub nodes_expanded: usize,
}

/// Depth-first exhaustive search over budget-feasible assignments.
pub struct GraphSearch;

impl GraphSearch {
    /// Finds the `request.nights`-night itinerary maximizing total stars
    /// within `request.budget`.
    ///
    /// Returns `Ok(None)` when no itinerary fits the budget or `lodgings`
    /// is empty. Deterministic: identical inputs give identical results.
    ///
    /// # Examples
    ///
    /// ```
    /// use stay_planner::graph::GraphSearch;
    /// use stay_planner::model::Lodging;
    /// use stay_planner::planner::PlanRequest;
    ///
    /// let lodgings = vec![
    ///     Lodging::new("H1", 3, 50.0, "X"),
    ///     Lodging::new("H2", 4, 80.0, "X"),
    /// ];
    /// let result = GraphSearch::run(&lodgings, &PlanRequest::new("X", 2, 160.0))
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(result.total_stars, 8);
    /// ```
    pub fn run(
        lodgings: &[Lodging],
        request: &PlanRequest,
    ) -> Result<Option<GraphResult>, PlanError> {
        request.validate()?;

        info!(
            nights = request.nights,
            budget = request.budget,
            options = lodgings.len(),
            "starting exhaustive search"
        );

        let mut stack: Vec<SearchNode> = lodgings
            .iter()
            .enumerate()
            .filter(|(_, l)| l.price <= request.budget)
            .map(|(i, _)| SearchNode::root(lodgings, i))
            .collect();

        let mut best: Option<SearchNode> = None;
        let mut nodes_expanded = 0usize;

        while let Some(node) = stack.pop() {
            nodes_expanded += 1;

            if node.night >= request.nights {
                if best.as_ref().is_none_or(|b| node.stars > b.stars) {
                    debug!(stars = node.stars, spent = node.spent, "new best");
                    best = Some(node);
                }
            } else {
                stack.extend(node.expand(lodgings, request.budget));
            }
        }

        let result = best.map(|node| GraphResult {
            itinerary: Itinerary::from_choices(lodgings, &node.path),
            total_stars: node.stars,
            budget_left: node.budget_left(request.budget),
            nodes_expanded,
        });

        match &result {
            Some(r) => info!(
                stars = r.total_stars,
                nodes = nodes_expanded,
                "exhaustive search finished"
            ),
            None => info!(nodes = nodes_expanded, "no feasible itinerary"),
        }

        Ok(result)
    }
}
