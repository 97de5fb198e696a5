//! The game engine.
//!
//! `Engine` is the only type a driver talks to. It owns the players and the
//! item pool for one game and exposes a small command/query surface:
//!
//! - Commands: `initialize_game`, `human_pick_fraction`, `skip_turn`,
//!   `ai_make_move`, `set_ai_difficulty`
//! - Queries: `game_state`, `max_available_fraction`, `is_ai_turn`, `winner`
//!
//! The game ends when every bag is full or the pool is empty. The player with
//! the highest total value wins; a shared maximum is a draw.

mod game;
pub mod history;
pub mod result;
pub mod snapshot;

pub use game::{Engine, GameMode};
pub use history::{MoveKind, MoveOutcome, MoveRecord};
pub use result::GameResult;
pub use snapshot::{GameSnapshot, ItemSnapshot, PlayerSnapshot};
