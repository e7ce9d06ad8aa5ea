//! Catalog abstraction.

use crate::model::Lodging;

/// Read-only source of lodging options.
///
/// Implementations must return the same order on every call within a run:
/// the planners index their pheromone matrices and particle vectors by
/// position in this order.
pub trait LodgingCatalog {
    /// Returns the lodging options for a destination, in stable order.
    ///
    /// An unknown destination yields an empty collection.
    fn get_lodgings(&self, destination: &str) -> Vec<Lodging>;
}

impl<C: LodgingCatalog + ?Sized> LodgingCatalog for &C {
    fn get_lodgings(&self, destination: &str) -> Vec<Lodging> {
        (**self).get_lodgings(destination)
    }
}
