//! Lodging options.

/// One bookable lodging choice for a destination.
///
/// Immutable once loaded into a catalog. Strategies refer to a lodging by
/// its position in the catalog's stable order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lodging {
    /// Display name, also used as identity.
    pub name: String,

    /// Star rating.
    pub stars: u32,

    /// Price per night.
    pub price: f64,

    /// Destination tag.
    pub destination: String,
}

impl Lodging {
    pub fn new(
        name: impl Into<String>,
        stars: u32,
        price: f64,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            stars,
            price,
            destination: destination.into(),
        }
    }

    /// Whether the price is a non-negative finite number.
    pub fn has_valid_price(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }

    /// Stars per unit of price. A free lodging has an infinite ratio.
    pub fn value_ratio(&self) -> f64 {
        if self.price > 0.0 {
            self.stars as f64 / self.price
        } else {
            f64::INFINITY
        }
    }
}

/// Highest star rating in a pool, `0` for an empty pool.
pub fn max_rating(lodgings: &[Lodging]) -> u32 {
    lodgings.iter().map(|l| l.stars).max().unwrap_or(0)
}

/// Lowest nightly price in a pool.
pub fn min_price(lodgings: &[Lodging]) -> Option<f64> {
    lodgings.iter().map(|l| l.price).min_by(f64::total_cmp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_ratio() {
        let h = Lodging::new("H2", 4, 80.0, "Varadero");
        assert!((h.value_ratio() - 0.05).abs() < 1e-12);
        let free = Lodging::new("Hostel", 1, 0.0, "Varadero");
        assert!(free.value_ratio().is_infinite());
    }

    #[test]
    fn test_valid_price() {
        assert!(Lodging::new("Hostel", 1, 0.0, "X").has_valid_price());
        assert!(Lodging::new("H1", 3, 49.99, "X").has_valid_price());
        assert!(!Lodging::new("Refund", 3, -10.0, "X").has_valid_price());
        assert!(!Lodging::new("Unknown", 3, f64::NAN, "X").has_valid_price());
        assert!(!Lodging::new("Suite", 5, f64::INFINITY, "X").has_valid_price());
    }

    #[test]
    fn test_pool_extremes() {
        let pool = vec![
            Lodging::new("H1", 3, 50.0, "X"),
            Lodging::new("H3", 5, 150.0, "X"),
        ];
        assert_eq!(max_rating(&pool), 5);
        assert_eq!(min_price(&pool), Some(50.0));
        assert_eq!(max_rating(&[]), 0);
        assert_eq!(min_price(&[]), None);
    }
}
