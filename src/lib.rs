//! # knapsack-duel
//!
//! A turn-based, capacity-constrained collection game engine.
//!
//! Players take turns claiming whole items or fractions of items from a shared
//! pool into weight-limited bags, competing for the highest total value. AI
//! seats play one of three knapsack-style heuristics.
//!
//! ## Invariants
//!
//! - A bag never holds more than its limit.
//! - Item weight is whole units: taken + remaining == original, exactly.
//! - Turns rotate in seat order; every committed command consumes one turn.
//! - The game ends when every bag is full or the pool is empty.
//!
//! ## Modules
//!
//! - `core`: Player ids, deterministic RNG, configuration, errors
//! - `items`: Items, fragments, per-game pool generation
//! - `players`: Capacity-bounded bags
//! - `policy`: AI decision policies per difficulty tier
//! - `engine`: Turn order, AI dispatch, termination, snapshots
//!
//! ## Example
//!
//! ```
//! use knapsack_duel::{Difficulty, Engine, GameConfig, GameMode};
//!
//! let mut engine = Engine::new(GameConfig::default().with_seed(1)).unwrap();
//! engine
//!     .initialize_game(&["You", "AI"], GameMode::SingleOpponent, Difficulty::Hard)
//!     .unwrap();
//!
//! while !engine.is_game_over() {
//!     if engine.is_ai_turn() {
//!         engine.ai_make_move();
//!     } else if engine.human_pick_fraction(0, 1.0).is_err() {
//!         engine.skip_turn();
//!     }
//! }
//!
//! let snapshot = engine.game_state();
//! assert!(snapshot.game_over);
//! ```

pub mod core;
pub mod engine;
pub mod items;
pub mod players;
pub mod policy;

// Re-export commonly used types
pub use crate::core::{ConfigError, EngineError, GameConfig, GameRng, GameRngState, PlayerId};

pub use crate::items::{Fragment, Item};

pub use crate::players::{Pickup, Player};

pub use crate::policy::{Decision, DecisionPolicy, Difficulty, PolicyProfile, TierPolicy};

pub use crate::engine::{
    Engine, GameMode, GameResult, GameSnapshot, ItemSnapshot, MoveKind, MoveOutcome, MoveRecord,
    PlayerSnapshot,
};
