//! Search nodes for the exhaustive search.

use crate::model::Lodging;

/// A partial itinerary on the search stack.
///
/// Nodes own their path and are dropped once popped and expanded; the
/// search keeps no tree.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchNode {
    /// Number of nights assigned so far (1-based night of the last stay).
    pub night: usize,

    /// Total price of the assigned nights, summed in night order.
    pub spent: f64,

    /// Sum of star ratings over the assigned nights.
    pub stars: u32,

    /// Catalog indices of the assigned nights, in order.
    pub path: Vec<usize>,
}

impl SearchNode {
    /// A first-night node booking `lodgings[index]`.
    pub fn root(lodgings: &[Lodging], index: usize) -> Self {
        let lodging = &lodgings[index];
        Self {
            night: 1,
            spent: lodging.price,
            stars: lodging.stars,
            path: vec![index],
        }
    }

    /// Children for the next night: one per lodging with
    /// `spent + price <= budget`, ordered by stars then stars-per-price,
    /// both descending.
    pub fn expand(&self, lodgings: &[Lodging], budget: f64) -> Vec<SearchNode> {
        let mut children: Vec<SearchNode> = lodgings
            .iter()
            .enumerate()
            .filter(|(_, l)| self.spent + l.price <= budget)
            .map(|(i, l)| {
                let mut path = Vec::with_capacity(self.path.len() + 1);
                path.extend_from_slice(&self.path);
                path.push(i);
                SearchNode {
                    night: self.night + 1,
                    spent: self.spent + l.price,
                    stars: self.stars + l.stars,
                    path,
                }
            })
            .collect();

        children.sort_by(|a, b| {
            let la = &lodgings[a.last()];
            let lb = &lodgings[b.last()];
            lb.stars
                .cmp(&la.stars)
                .then_with(|| lb.value_ratio().total_cmp(&la.value_ratio()))
        });
        children
    }

    /// Budget remaining after the assigned nights.
    pub fn budget_left(&self, budget: f64) -> f64 {
        budget - self.spent
    }

    fn last(&self) -> usize {
        self.path[self.path.len() - 1]
    }
}
