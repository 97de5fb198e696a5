//! Error types.
//!
//! Gameplay failures (`EngineError`) are recoverable: the engine rejects the
//! command, keeps its state, and the driver lets the player retry.
//! Configuration failures (`ConfigError`) surface when a game is set up.

use thiserror::Error;

/// A rejected gameplay command. State is unchanged when one is returned.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EngineError {
    #[error("no game has been initialized")]
    NoActiveGame,

    #[error("the game is over")]
    GameOver,

    #[error("not a human player's turn")]
    NotPlayersTurn,

    #[error("invalid item index {index} (pool has {len} items)")]
    InvalidItemIndex { index: usize, len: usize },

    #[error("item is already depleted")]
    ItemDepleted,

    #[error("not enough space in bag")]
    InsufficientCapacity,

    #[error("invalid fraction")]
    InvalidFraction,

    #[error("failed to take fraction")]
    ExtractionFailed,

    #[error("no viable move")]
    NoViableMove,
}

/// An invalid game setup.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one player")]
    NoPlayers,

    #[error("at most 255 players are supported, got {0}")]
    TooManyPlayers(usize),

    #[error("catalog of {catalog} items is smaller than the requested sample of {sample}")]
    CatalogTooSmall { catalog: usize, sample: usize },

    #[error("bag capacity must be a positive whole number, got {0}")]
    InvalidCapacity(f64),

    #[error("invalid {name} range {low}..={high}")]
    InvalidRange {
        name: &'static str,
        low: u32,
        high: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            EngineError::InvalidItemIndex { index: 999, len: 25 }.to_string(),
            "invalid item index 999 (pool has 25 items)"
        );
        assert_eq!(EngineError::InsufficientCapacity.to_string(), "not enough space in bag");
        assert_eq!(
            ConfigError::CatalogTooSmall { catalog: 10, sample: 25 }.to_string(),
            "catalog of 10 items is smaller than the requested sample of 25"
        );
    }
}
