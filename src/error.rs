//! Error types for planning requests.
//!
//! Only configuration problems are errors. An itinerary that cannot fit the
//! budget is a normal outcome and is reported as data by each strategy.

use thiserror::Error;

/// Configuration error reported before any search starts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("night count must be positive, got {0}")]
    InvalidNights(usize),

    #[error("budget must be a non-negative finite number, got {0}")]
    InvalidBudget(f64),

    #[error("no lodging options available for destination '{destination}'")]
    EmptyCatalog { destination: String },

    #[error("lodging '{name}' has price {price}; prices must be non-negative and finite")]
    InvalidPrice { name: String, price: f64 },

    #[error("evaporation rate must be in [0, 1], got {0}")]
    InvalidEvaporationRate(f64),

    #[error("{name} must be positive")]
    InvalidCount { name: &'static str },

    #[error("{name} must be a finite number, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Checks that a real-valued parameter is finite.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<(), PlanError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PlanError::InvalidParameter { name, value })
    }
}
