//! Final game result.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Unique highest total value.
    Winner(PlayerId),
    /// Two or more players share the highest total value.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    /// Resolve a result from final totals, in seat order.
    ///
    /// Returns `None` for an empty slice. Totals are compared exactly.
    #[must_use]
    pub fn from_totals(totals: &[f64]) -> Option<Self> {
        let best = totals.iter().copied().reduce(f64::max)?;
        let mut leaders = totals
            .iter()
            .enumerate()
            .filter(|(_, &total)| total == best)
            .map(|(i, _)| i);

        let first = leaders.next()?;
        if leaders.next().is_some() {
            Some(GameResult::Draw)
        } else {
            Some(GameResult::Winner(PlayerId::new(first as u8)))
        }
    }
}
