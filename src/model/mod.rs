//! Shared data model: lodging options and itineraries.

mod itinerary;
mod lodging;

pub use itinerary::{Itinerary, ItineraryStats, Stay};
pub use lodging::{max_rating, min_price, Lodging};
