//! Easy tier: random item, random fraction.

use crate::core::GameRng;
use crate::items::Item;
use crate::players::Player;

use super::{candidates, Decision, DecisionPolicy};

/// Picks a random item that fits and a random fraction of it.
///
/// The fraction is drawn from `[low, high]` (`high` defaults to the most
/// that fits) and then clamped to what fits.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomPick {
    pub low: f64,
    pub high: Option<f64>,
}

impl RandomPick {
    /// Fraction in `[0.1, max]`.
    #[must_use]
    pub fn live() -> Self {
        Self { low: 0.1, high: None }
    }

    /// Fraction in `[0.5, 1.0]`, clamped to max.
    #[must_use]
    pub fn advisor() -> Self {
        Self { low: 0.5, high: Some(1.0) }
    }
}

impl DecisionPolicy for RandomPick {
    fn decide(&self, items: &[Item], player: &Player, rng: &mut GameRng) -> Decision {
        let mut order = candidates(items);
        rng.shuffle(&mut order);

        for index in order {
            let max_fraction = player.available_fraction(&items[index]);
            if max_fraction <= 0.0 {
                continue;
            }
            let high = self.high.unwrap_or(max_fraction);
            let fraction = rng.uniform(self.low.min(high), high).min(max_fraction);
            return Decision::Take { index, fraction };
        }

        Decision::NoMove
    }
}
