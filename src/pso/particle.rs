//! Particles over lodging-index vectors.

use rand::Rng;

use super::config::PsoConfig;
use crate::model::Lodging;

/// One candidate itinerary in the swarm.
///
/// `position[night]` is a catalog index; `velocity[night]` is the matching
/// real-valued velocity component.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub position: Vec<usize>,
    pub velocity: Vec<f64>,
    pub best_position: Vec<usize>,
    pub best_fitness: f64,
}

impl Particle {
    /// A random budget-feasible assignment with zero velocity.
    ///
    /// Nights are filled in order with a uniformly chosen affordable
    /// lodging. Once nothing is affordable the remaining nights repeat the
    /// last choice (index 0 if there was none).
    pub fn random<R: Rng>(
        lodgings: &[Lodging],
        nights: usize,
        budget: f64,
        scratch: &mut Vec<usize>,
        rng: &mut R,
    ) -> Self {
        let mut position = Vec::with_capacity(nights);
        let mut spent = 0.0;
        for _ in 0..nights {
            affordable(lodgings, spent, budget, scratch);
            if scratch.is_empty() {
                break;
            }
            let pick = scratch[rng.random_range(0..scratch.len())];
            spent += lodgings[pick].price;
            position.push(pick);
        }
        let filler = position.last().copied().unwrap_or(0);
        position.resize(nights, filler);

        Self {
            best_position: position.clone(),
            velocity: vec![0.0; nights],
            position,
            best_fitness: f64::NEG_INFINITY,
        }
    }

    /// Velocity update followed by sigmoid-driven resampling.
    ///
    /// For each night the velocity becomes
    /// `w * v + c1 * r1 * (personal_best - x) + c2 * r2 * (global_best - x)`.
    /// With probability `sigmoid(v)` the night is then replaced by a uniformly
    /// chosen lodging affordable after paying for the earlier nights.
    pub fn step<R: Rng>(
        &mut self,
        global_best: &[usize],
        config: &PsoConfig,
        lodgings: &[Lodging],
        budget: f64,
        scratch: &mut Vec<usize>,
        rng: &mut R,
    ) {
        for d in 0..self.position.len() {
            let r1: f64 = rng.random();
            let r2: f64 = rng.random();
            let x = self.position[d] as f64;
            let v = config.inertia * self.velocity[d]
                + config.cognitive * r1 * (self.best_position[d] as f64 - x)
                + config.social * r2 * (global_best[d] as f64 - x);
            self.velocity[d] = v;

            if rng.random::<f64>() < sigmoid(v) {
                let spent: f64 = self.position[..d].iter().map(|&i| lodgings[i].price).sum();
                affordable(lodgings, spent, budget, scratch);
                if !scratch.is_empty() {
                    self.position[d] = scratch[rng.random_range(0..scratch.len())];
                }
            }
        }
    }

    /// Restores budget feasibility.
    ///
    /// Walks the nights accumulating cost; any night that would overflow the
    /// budget is swapped for the cheapest lodging that still fits, or index 0
    /// when none does. Index 0 then leaves the particle over budget.
    pub fn repair(&mut self, lodgings: &[Lodging], budget: f64) {
        let mut used = 0.0;
        for choice in self.position.iter_mut() {
            if used + lodgings[*choice].price > budget {
                *choice = lodgings
                    .iter()
                    .enumerate()
                    .filter(|(_, l)| used + l.price <= budget)
                    .min_by(|(_, a), (_, b)| a.price.total_cmp(&b.price))
                    .map_or(0, |(i, _)| i);
            }
            used += lodgings[*choice].price;
        }
    }

    /// Total price of the current position.
    pub fn cost(&self, lodgings: &[Lodging]) -> f64 {
        self.position.iter().map(|&i| lodgings[i].price).sum()
    }

    /// Records the current position as personal best if `fitness` improves it.
    pub fn remember(&mut self, fitness: f64) -> bool {
        if fitness > self.best_fitness {
            self.best_fitness = fitness;
            self.best_position.clone_from(&self.position);
            true
        } else {
            false
        }
    }
}

/// Fills `out` with the indices of lodgings where `spent + price <= budget`.
fn affordable(lodgings: &[Lodging], spent: f64, budget: f64, out: &mut Vec<usize>) {
    out.clear();
    out.extend(
        lodgings
            .iter()
            .enumerate()
            .filter(|(_, l)| spent + l.price <= budget)
            .map(|(i, _)| i),
    );
}

fn sigmoid(v: f64) -> f64 {
    1.0 / (1.0 + (-v).exp())
}
