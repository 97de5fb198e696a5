//! Game configuration.
//!
//! `GameConfig` fixes everything a game needs before it starts:
//! - Bag capacity shared by every player
//! - Catalog size and how many items each game draws from it
//! - Inclusive ranges for the random integer weight and value of each item
//! - RNG seed and which AI threshold profile to use
//!
//! Configs are serde-serializable so drivers can load them from JSON.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::policy::PolicyProfile;

/// Configuration for an engine instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Weight limit of every player's bag.
    pub bag_capacity: f64,

    /// Number of items in the numbered catalog (`Item 1` .. `Item N`).
    pub catalog_size: usize,

    /// Number of distinct catalog entries drawn into each game's pool.
    pub sample_size: usize,

    /// Inclusive `(min, max)` integer weight of a drawn item.
    pub weight_range: (u32, u32),

    /// Inclusive `(min, max)` integer value of a drawn item.
    pub value_range: (u32, u32),

    /// Seed for the engine RNG.
    pub seed: u64,

    /// Threshold profile for the AI tiers.
    pub policy_profile: PolicyProfile,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bag_capacity: 25.0,
            catalog_size: 50,
            sample_size: 25,
            weight_range: (1, 10),
            value_range: (5, 25),
            seed: 42,
            policy_profile: PolicyProfile::Live,
        }
    }
}

impl GameConfig {
    /// Set the bag capacity.
    #[must_use]
    pub fn with_bag_capacity(mut self, capacity: f64) -> Self {
        self.bag_capacity = capacity;
        self
    }

    /// Set catalog size and per-game sample size.
    #[must_use]
    pub fn with_catalog(mut self, catalog_size: usize, sample_size: usize) -> Self {
        self.catalog_size = catalog_size;
        self.sample_size = sample_size;
        self
    }

    /// Set the inclusive weight range.
    #[must_use]
    pub fn with_weight_range(mut self, min: u32, max: u32) -> Self {
        self.weight_range = (min, max);
        self
    }

    /// Set the inclusive value range.
    #[must_use]
    pub fn with_value_range(mut self, min: u32, max: u32) -> Self {
        self.value_range = (min, max);
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the AI threshold profile.
    #[must_use]
    pub fn with_policy_profile(mut self, profile: PolicyProfile) -> Self {
        self.policy_profile = profile;
        self
    }

    /// Inclusive weight range as a `RangeInclusive`.
    #[must_use]
    pub fn weights(&self) -> RangeInclusive<u32> {
        self.weight_range.0..=self.weight_range.1
    }

    /// Inclusive value range as a `RangeInclusive`.
    #[must_use]
    pub fn values(&self) -> RangeInclusive<u32> {
        self.value_range.0..=self.value_range.1
    }

    /// Check the configuration for setup errors.
    ///
    /// Weights must start at 1 so every drawn item can be depleted. Capacity
    /// must be a whole number, since bags only fill in whole weight units.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let capacity = self.bag_capacity;
        if !capacity.is_finite() || capacity <= 0.0 || capacity.fract() != 0.0 {
            return Err(ConfigError::InvalidCapacity(self.bag_capacity));
        }
        if self.catalog_size < self.sample_size {
            return Err(ConfigError::CatalogTooSmall {
                catalog: self.catalog_size,
                sample: self.sample_size,
            });
        }
        let (low, high) = self.weight_range;
        if low == 0 || low > high {
            return Err(ConfigError::InvalidRange { name: "weight", low, high });
        }
        let (low, high) = self.value_range;
        if low > high {
            return Err(ConfigError::InvalidRange { name: "value", low, high });
        }
        Ok(())
    }
}
