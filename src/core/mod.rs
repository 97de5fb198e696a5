//! Core engine types: player ids, RNG, configuration, errors.
//!
//! These are the building blocks shared by items, players, policies and the
//! engine. Nothing here knows about turn order or scoring.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use error::{ConfigError, EngineError};
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
