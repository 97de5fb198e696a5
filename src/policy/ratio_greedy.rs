//! Hard tier: greedy by value-to-weight ratio (fractional knapsack heuristic).
//!
//! One greedy step per call. Taking the best-ratio item, or as much of it as
//! fits, each turn is the continuous-relaxation optimum when one player picks
//! alone; no global plan is kept between turns.

use crate::core::GameRng;
use crate::items::Item;
use crate::players::Player;

use super::{candidates, rank_by, Decision, DecisionPolicy};

#[derive(Clone, Debug, PartialEq)]
pub struct RatioGreedy {
    /// A partial take must exceed this fraction to be worth a turn.
    pub min_fraction: f64,
}

impl RatioGreedy {
    #[must_use]
    pub fn live() -> Self {
        Self { min_fraction: 0.0 }
    }

    #[must_use]
    pub fn advisor() -> Self {
        Self { min_fraction: 0.01 }
    }
}

impl DecisionPolicy for RatioGreedy {
    fn decide(&self, items: &[Item], player: &Player, _rng: &mut GameRng) -> Decision {
        let mut order = candidates(items);
        rank_by(&mut order, items, Item::ratio);

        order
            .into_iter()
            .find_map(|index| {
                let fraction = player.available_fraction(&items[index]);
                (fraction > self.min_fraction).then_some(Decision::Take { index, fraction })
            })
            .unwrap_or(Decision::NoMove)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_best_ratio_whole() {
        let items = vec![
            Item::new("A", 5, 10.0), // 2.0
            Item::new("B", 2, 8.0),  // 4.0
            Item::new("C", 4, 12.0), // 3.0
        ];
        let player = Player::new("AI", 25.0);
        let mut rng = GameRng::new(0);

        assert_eq!(
            RatioGreedy::live().decide(&items, &player, &mut rng),
            Decision::Take { index: 1, fraction: 1.0 }
        );
    }

    #[test]
    fn test_takes_largest_fitting_fraction() {
        let items = vec![Item::new("Dense", 10, 50.0), Item::new("Thin", 1, 1.0)];
        let mut player = Player::new("AI", 10.0);
        let mut filler = Item::new("Filler", 6, 6.0);
        player.add_item_fraction(&mut filler, 1.0).unwrap();
        let mut rng = GameRng::new(0);

        assert_eq!(
            RatioGreedy::live().decide(&items, &player, &mut rng),
            Decision::Take { index: 0, fraction: 0.4 }
        );
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let items = vec![Item::new("First", 2, 4.0), Item::new("Second", 3, 6.0)];
        let player = Player::new("AI", 25.0);
        let mut rng = GameRng::new(0);

        assert_eq!(
            RatioGreedy::live().decide(&items, &player, &mut rng),
            Decision::Take { index: 0, fraction: 1.0 }
        );
    }

    #[test]
    fn test_advisor_threshold() {
        // 0.5 units of space on a 100-unit item is 0.005 < 1%
        let items = vec![Item::new("Huge", 100, 500.0)];
        let player = Player::new("AI", 0.5);
        let mut rng = GameRng::new(0);

        assert_eq!(RatioGreedy::advisor().decide(&items, &player, &mut rng), Decision::NoMove);
        assert!(RatioGreedy::live().decide(&items, &player, &mut rng).is_move());
    }
}
