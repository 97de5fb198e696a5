//! Medium tier: prefer taking entire items (0/1 knapsack heuristic).

use crate::core::GameRng;
use crate::items::Item;
use crate::players::Player;

use super::{candidates, rank_by, Decision, DecisionPolicy};

/// Which item property candidates are ranked by (descending).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CandidateOrder {
    Ratio,
    RemainingValue,
}

/// What to do when no candidate fits whole.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PartialFallback {
    /// Take as much as fits of the top-ranked candidate.
    TopCandidate,
    /// Take the first ranked candidate of which at least this fraction fits.
    MinFraction(f64),
}

/// Walks candidates in rank order and takes the first that fits whole.
#[derive(Clone, Debug, PartialEq)]
pub struct WholeItemFirst {
    pub order: CandidateOrder,
    /// An item "fits whole" when at least this fraction of it fits.
    pub whole_threshold: f64,
    pub fallback: PartialFallback,
}

impl WholeItemFirst {
    #[must_use]
    pub fn live() -> Self {
        Self {
            order: CandidateOrder::Ratio,
            whole_threshold: 0.99,
            fallback: PartialFallback::TopCandidate,
        }
    }

    #[must_use]
    pub fn advisor() -> Self {
        Self {
            order: CandidateOrder::RemainingValue,
            whole_threshold: 0.95,
            fallback: PartialFallback::MinFraction(0.7),
        }
    }
}

impl DecisionPolicy for WholeItemFirst {
    fn decide(&self, items: &[Item], player: &Player, _rng: &mut GameRng) -> Decision {
        let mut order = candidates(items);
        match self.order {
            CandidateOrder::Ratio => rank_by(&mut order, items, Item::ratio),
            CandidateOrder::RemainingValue => rank_by(&mut order, items, Item::value),
        }

        for &index in &order {
            let max_fraction = player.available_fraction(&items[index]);
            if max_fraction <= 0.0 {
                continue;
            }
            if max_fraction >= self.whole_threshold {
                return Decision::Take { index, fraction: 1.0 };
            }
            if let PartialFallback::MinFraction(min) = self.fallback {
                if max_fraction >= min {
                    return Decision::Take { index, fraction: max_fraction };
                }
            }
        }

        if self.fallback == PartialFallback::TopCandidate {
            if let Some(&index) = order.first() {
                let max_fraction = player.available_fraction(&items[index]);
                if max_fraction > 0.0 {
                    return Decision::Take { index, fraction: max_fraction };
                }
            }
        }

        Decision::NoMove
    }
}
