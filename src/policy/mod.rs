//! AI decision policies, one per difficulty tier.
//!
//! A policy looks at the pool and the acting player and returns a single
//! `Decision`. Policies never mutate anything; the engine applies the move.
//!
//! - `Easy` → [`RandomPick`]
//! - `Medium` → [`WholeItemFirst`]
//! - `Hard` → [`RatioGreedy`]
//!
//! Thresholds come from a [`PolicyProfile`]. Every tier reports "nothing to
//! take" as [`Decision::NoMove`].

pub mod difficulty;
pub mod random;
pub mod ratio_greedy;
pub mod whole_item;

pub use difficulty::{Difficulty, ParseDifficultyError, PolicyProfile};
pub use random::RandomPick;
pub use ratio_greedy::RatioGreedy;
pub use whole_item::{CandidateOrder, PartialFallback, WholeItemFirst};

use crate::core::GameRng;
use crate::items::Item;
use crate::players::Player;

/// Outcome of a policy call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decision {
    /// Take `fraction` of `items[index]`.
    Take { index: usize, fraction: f64 },
    /// No candidate fits.
    NoMove,
}

impl Decision {
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, Decision::Take { .. })
    }

    #[must_use]
    pub fn fraction(&self) -> Option<f64> {
        match self {
            Decision::Take { fraction, .. } => Some(*fraction),
            Decision::NoMove => None,
        }
    }
}

/// Chooses a move for an AI seat.
pub trait DecisionPolicy: Send + Sync {
    /// Pick an item and fraction for `player`. Depleted items are never chosen.
    fn decide(&self, items: &[Item], player: &Player, rng: &mut GameRng) -> Decision;
}

/// The policy behind each tier.
#[derive(Clone, Debug, PartialEq)]
pub enum TierPolicy {
    Random(RandomPick),
    WholeItem(WholeItemFirst),
    RatioGreedy(RatioGreedy),
}

impl TierPolicy {
    /// Policy for `difficulty` under `profile`.
    #[must_use]
    pub fn for_tier(difficulty: Difficulty, profile: PolicyProfile) -> Self {
        match (difficulty, profile) {
            (Difficulty::Easy, PolicyProfile::Live) => TierPolicy::Random(RandomPick::live()),
            (Difficulty::Easy, PolicyProfile::Advisor) => TierPolicy::Random(RandomPick::advisor()),
            (Difficulty::Medium, PolicyProfile::Live) => {
                TierPolicy::WholeItem(WholeItemFirst::live())
            }
            (Difficulty::Medium, PolicyProfile::Advisor) => {
                TierPolicy::WholeItem(WholeItemFirst::advisor())
            }
            (Difficulty::Hard, PolicyProfile::Live) => TierPolicy::RatioGreedy(RatioGreedy::live()),
            (Difficulty::Hard, PolicyProfile::Advisor) => {
                TierPolicy::RatioGreedy(RatioGreedy::advisor())
            }
        }
    }
}

impl DecisionPolicy for TierPolicy {
    fn decide(&self, items: &[Item], player: &Player, rng: &mut GameRng) -> Decision {
        match self {
            TierPolicy::Random(policy) => policy.decide(items, player, rng),
            TierPolicy::WholeItem(policy) => policy.decide(items, player, rng),
            TierPolicy::RatioGreedy(policy) => policy.decide(items, player, rng),
        }
    }
}

/// Indices of the items that can still be taken from.
pub(crate) fn candidates(items: &[Item]) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| !item.is_depleted())
        .map(|(i, _)| i)
        .collect()
}

/// Stable sort of `order` by `key` descending; ties keep pool order.
pub(crate) fn rank_by(order: &mut [usize], items: &[Item], key: fn(&Item) -> f64) {
    order.sort_by(|&a, &b| key(&items[b]).total_cmp(&key(&items[a])));
}
