//! Pheromone trails.

/// Night x lodging grid of non-negative reinforcement weights.
///
/// Stored row-major in one allocation; each row is one night and each
/// column a lodging position in catalog order.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    nights: usize,
    options: usize,
    cells: Vec<f64>,
}

impl PheromoneMatrix {
    /// A matrix with every cell set to `initial`.
    pub fn new(nights: usize, options: usize, initial: f64) -> Self {
        Self {
            nights,
            options,
            cells: vec![initial; nights * options],
        }
    }

    pub fn nights(&self) -> usize {
        self.nights
    }

    pub fn options(&self) -> usize {
        self.options
    }

    /// # Panics
    /// Panics if `night` or `option` is out of bounds.
    pub fn get(&self, night: usize, option: usize) -> f64 {
        self.cells[self.offset(night, option)]
    }

    /// Pheromone levels of every lodging for one night.
    pub fn row(&self, night: usize) -> &[f64] {
        assert!(night < self.nights, "night {night} out of bounds");
        let start = night * self.options;
        &self.cells[start..start + self.options]
    }

    /// Multiplies every cell by `1 - rate`.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = 1.0 - rate;
        for cell in &mut self.cells {
            *cell *= keep;
        }
    }

    /// Adds `amount` to the cell of each (night, choice) pair of a tour.
    ///
    /// Negative amounts are ignored so cells never drop below zero.
    pub fn deposit(&mut self, tour: &[usize], amount: f64) {
        if amount <= 0.0 {
            return;
        }
        for (night, &option) in tour.iter().enumerate() {
            let offset = self.offset(night, option);
            self.cells[offset] += amount;
        }
    }

    fn offset(&self, night: usize, option: usize) -> usize {
        assert!(
            night < self.nights && option < self.options,
            "cell ({night}, {option}) out of bounds for {}x{} matrix",
            self.nights,
            self.options
        );
        night * self.options + option
    }
}
