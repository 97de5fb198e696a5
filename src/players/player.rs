//! Capacity-bounded players.
//!
//! A `Player` owns a bag with a weight limit. `add_item_fraction` is the only
//! way weight enters a bag, and it never lets `current_weight` pass
//! `bag_limit`.

use smallvec::SmallVec;

use crate::core::EngineError;
use crate::items::{Fragment, Item};

/// Remaining space or item weight at or below this counts as nothing.
pub const SPACE_EPSILON: f64 = 0.001;

/// Slack when comparing a whole-unit amount against remaining space.
const FIT_EPSILON: f64 = 1e-9;

/// A successful extraction into a bag.
#[derive(Clone, Debug, PartialEq)]
pub struct Pickup {
    /// Fraction of the item's remaining weight that was requested after clamping.
    pub fraction: f64,
    /// What went into the bag.
    pub fragment: Fragment,
}

impl std::fmt::Display for Pickup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Added {:.2} of {}", self.fraction, self.fragment.name)
    }
}

/// A player and their bag.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    name: String,
    bag_limit: f64,
    current_weight: f64,
    total_value: f64,
    /// Fragments in the order they were taken.
    /// SmallVec keeps a typical game's bag off the heap.
    bag: SmallVec<[Fragment; 8]>,
}

impl Player {
    /// Create a player with an empty bag.
    pub fn new(name: impl Into<String>, bag_limit: f64) -> Self {
        Self {
            name: name.into(),
            bag_limit,
            current_weight: 0.0,
            total_value: 0.0,
            bag: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn bag_limit(&self) -> f64 {
        self.bag_limit
    }

    #[must_use]
    pub fn current_weight(&self) -> f64 {
        self.current_weight
    }

    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    #[must_use]
    pub fn bag(&self) -> &[Fragment] {
        &self.bag
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.bag.len()
    }

    #[must_use]
    pub fn space_left(&self) -> f64 {
        self.bag_limit - self.current_weight
    }

    /// True once the bag has reached its limit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.current_weight >= self.bag_limit
    }

    /// Largest fraction of `item` that fits in the bag, in `[0, 1]`.
    #[must_use]
    pub fn available_fraction(&self, item: &Item) -> f64 {
        let space = self.space_left();
        let weight = f64::from(item.weight());
        if space <= SPACE_EPSILON || weight <= SPACE_EPSILON {
            return 0.0;
        }
        (space / weight).min(1.0)
    }

    /// Whether `fraction` of `item`'s remaining weight would fit.
    #[must_use]
    pub fn can_pick_fraction(&self, item: &Item, fraction: f64) -> bool {
        if !(fraction > 0.0 && fraction <= 1.0) {
            return false;
        }
        self.current_weight + f64::from(item.weight()) * fraction <= self.bag_limit
    }

    /// Move up to `fraction` of `item` into the bag.
    ///
    /// The fraction is clamped to 1 and then to what fits. On error neither
    /// the player nor the item changes.
    pub fn add_item_fraction(
        &mut self,
        item: &mut Item,
        fraction: f64,
    ) -> Result<Pickup, EngineError> {
        if !fraction.is_finite() || fraction <= 0.0 {
            return Err(EngineError::InvalidFraction);
        }
        let max_fraction = self.available_fraction(item);
        if max_fraction <= 0.0 {
            return Err(EngineError::InsufficientCapacity);
        }
        let mut fraction = fraction.min(1.0).min(max_fraction);

        // Whole units only: rounding must not push the bag over its limit.
        let space = self.space_left();
        if f64::from(item.amount_for(fraction)) > space + FIT_EPSILON {
            let fit = (space + FIT_EPSILON).floor();
            if fit < 1.0 {
                return Err(EngineError::InsufficientCapacity);
            }
            fraction = fit / f64::from(item.weight());
        }

        let fragment = item
            .take_fraction(fraction)
            .ok_or(EngineError::ExtractionFailed)?;

        self.current_weight += f64::from(fragment.weight);
        self.total_value += fragment.value;
        self.bag.push(fragment.clone());

        Ok(Pickup { fraction, fragment })
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} items, {:.1}/{} weight, {:.1} value",
            self.name,
            self.bag.len(),
            self.current_weight,
            self.bag_limit,
            self.total_value
        )
    }
}
