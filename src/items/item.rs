//! Depletable items and the fragments taken from them.
//!
//! An `Item` has an integer weight and a real value that shrink together:
//! every extraction removes a whole number of weight units and
//! `units * unit_value` of value. Weight is never fractional, so the weight
//! taken from an item plus what remains always equals its original weight.

use serde::{Deserialize, Serialize};

/// A portion of an item removed by one extraction.
///
/// Fragments are plain values owned by the bag that received them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fragment {
    /// Name of the item this fragment came from.
    pub name: String,
    /// Weight units taken.
    pub weight: u32,
    /// Value taken (`weight * unit_value` of the source item).
    pub value: f64,
}

/// A shared-pool resource with remaining weight and value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Item {
    name: String,
    weight: u32,
    value: f64,
    original_weight: u32,
    original_value: f64,
    unit_value: f64,
}

impl Item {
    /// Create a fresh item. `unit_value` is fixed here for the item's lifetime.
    pub fn new(name: impl Into<String>, weight: u32, value: f64) -> Self {
        let value = value.max(0.0);
        let unit_value = if weight > 0 { value / weight as f64 } else { 0.0 };
        Self {
            name: name.into(),
            weight,
            value,
            original_weight: weight,
            original_value: value,
            unit_value,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Remaining weight.
    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    /// Remaining value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn original_weight(&self) -> u32 {
        self.original_weight
    }

    #[must_use]
    pub fn original_value(&self) -> f64 {
        self.original_value
    }

    /// Value per unit of weight, fixed at creation.
    #[must_use]
    pub fn unit_value(&self) -> f64 {
        self.unit_value
    }

    /// Alias of [`Item::unit_value`] used by the ratio-driven AI tiers.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        self.unit_value
    }

    #[must_use]
    pub fn is_depleted(&self) -> bool {
        self.weight == 0
    }

    /// Weight units `take_fraction(fraction)` would remove, or 0 if it would fail.
    ///
    /// Rounds half to even, so `0.5` of a 5-unit item is 2 units.
    #[must_use]
    pub fn amount_for(&self, fraction: f64) -> u32 {
        if !fraction.is_finite() || fraction <= 0.0 || fraction > 1.0 || self.weight == 0 {
            return 0;
        }
        let amount = (self.weight as f64 * fraction).round_ties_even();
        (amount as u32).min(self.weight)
    }

    /// Remove `fraction` of the remaining weight and the matching value.
    ///
    /// Returns `None` without touching the item when `fraction` is outside
    /// `(0, 1]`, the item is depleted, or the fraction rounds to zero units.
    pub fn take_fraction(&mut self, fraction: f64) -> Option<Fragment> {
        let amount = self.amount_for(fraction);
        if amount == 0 {
            return None;
        }

        let taken_value = amount as f64 * self.unit_value;
        self.weight -= amount;
        self.value = if self.weight == 0 {
            0.0
        } else {
            (self.value - taken_value).max(0.0)
        };

        Some(Fragment {
            name: self.name.clone(),
            weight: amount,
            value: taken_value,
        })
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (W:{}, V:{:.1})", self.name, self.weight, self.value)
    }
}
