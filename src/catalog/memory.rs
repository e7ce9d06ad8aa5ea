//! Catalog backed by a vector of lodgings.

use super::types::LodgingCatalog;
use crate::model::Lodging;

/// An in-memory lodging catalog preserving insertion order.
///
/// # Examples
///
/// ```
/// use stay_planner::catalog::{InMemoryCatalog, LodgingCatalog};
/// use stay_planner::model::Lodging;
///
/// let catalog = InMemoryCatalog::new(vec![
///     Lodging::new("Sol Palmeras", 4, 120.0, "Varadero"),
///     Lodging::new("Hotel Inglaterra", 3, 70.0, "La Habana"),
/// ]);
/// assert_eq!(catalog.get_lodgings("Varadero").len(), 1);
/// assert_eq!(catalog.destinations(), vec!["Varadero", "La Habana"]);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InMemoryCatalog {
    lodgings: Vec<Lodging>,
}

impl InMemoryCatalog {
    pub fn new(lodgings: Vec<Lodging>) -> Self {
        Self { lodgings }
    }

    pub fn len(&self) -> usize {
        self.lodgings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lodgings.is_empty()
    }

    /// All lodgings, across destinations.
    pub fn all(&self) -> &[Lodging] {
        &self.lodgings
    }

    /// Distinct destinations in first-seen order.
    pub fn destinations(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for lodging in &self.lodgings {
            if !seen.contains(&lodging.destination.as_str()) {
                seen.push(&lodging.destination);
            }
        }
        seen
    }

    /// Lodgings matching every given criterion. `None` criteria are ignored.
    pub fn filter(
        &self,
        destination: Option<&str>,
        max_price: Option<f64>,
        min_stars: Option<u32>,
    ) -> Vec<Lodging> {
        self.lodgings
            .iter()
            .filter(|l| destination.is_none_or(|d| l.destination == d))
            .filter(|l| max_price.is_none_or(|p| l.price <= p))
            .filter(|l| min_stars.is_none_or(|s| l.stars >= s))
            .cloned()
            .collect()
    }
}

impl LodgingCatalog for InMemoryCatalog {
    fn get_lodgings(&self, destination: &str) -> Vec<Lodging> {
        self.filter(Some(destination), None, None)
    }
}

impl FromIterator<Lodging> for InMemoryCatalog {
    fn from_iter<T: IntoIterator<Item = Lodging>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
