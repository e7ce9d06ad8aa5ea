//! Itineraries and their summary statistics.

use super::lodging::Lodging;

/// One night of an itinerary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stay {
    /// Night number, starting at 1.
    pub night: usize,

    /// Position of the lodging in the catalog order used for the run.
    pub index: usize,

    /// The lodging booked for this night.
    pub lodging: Lodging,
}

/// A night-ordered sequence of lodging assignments.
///
/// May be shorter than the requested night count when a construction
/// ran out of budget. The empty itinerary signals "no feasible solution".
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    stays: Vec<Stay>,
}

impl Itinerary {
    /// The empty itinerary.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds an itinerary from catalog indices, one per night.
    ///
    /// # Panics
    /// Panics if an index is out of bounds for `lodgings`.
    pub fn from_choices(lodgings: &[Lodging], choices: &[usize]) -> Self {
        let stays = choices
            .iter()
            .enumerate()
            .map(|(night, &index)| Stay {
                night: night + 1,
                index,
                lodging: lodgings[index].clone(),
            })
            .collect();
        Self { stays }
    }

    pub fn stays(&self) -> &[Stay] {
        &self.stays
    }

    pub fn len(&self) -> usize {
        self.stays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stays.is_empty()
    }

    /// Catalog indices in night order.
    pub fn choices(&self) -> Vec<usize> {
        self.stays.iter().map(|s| s.index).collect()
    }

    pub fn lodgings(&self) -> impl Iterator<Item = &Lodging> {
        self.stays.iter().map(|s| &s.lodging)
    }

    pub fn total_stars(&self) -> u32 {
        self.lodgings().map(|l| l.stars).sum()
    }

    pub fn total_cost(&self) -> f64 {
        self.lodgings().map(|l| l.price).sum()
    }

    /// Number of adjacent nights booked at different lodgings.
    pub fn changes(&self) -> usize {
        self.stays
            .windows(2)
            .filter(|w| w[0].index != w[1].index)
            .count()
    }

    /// Whether the itinerary fits within `budget`.
    pub fn is_within_budget(&self, budget: f64) -> bool {
        self.total_cost() <= budget
    }

    /// Summary used in planning reports.
    pub fn stats(&self, budget: f64) -> ItineraryStats {
        let total_cost = self.total_cost();
        ItineraryStats {
            nights: self.len(),
            total_stars: self.total_stars(),
            total_cost,
            changes: self.changes(),
            budget_left: budget - total_cost,
        }
    }
}

/// Aggregate figures for an itinerary.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItineraryStats {
    pub nights: usize,
    pub total_stars: u32,
    pub total_cost: f64,
    pub changes: usize,
    pub budget_left: f64,
}
