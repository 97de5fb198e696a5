//! Read-only game snapshot for renderers and test harnesses.
//!
//! The snapshot owns copies of everything it shows, so a driver can keep it
//! around or serialize it while the engine moves on.

use serde::{Deserialize, Serialize};

use crate::items::{Fragment, Item};
use crate::players::Player;
use crate::policy::Difficulty;

/// One player's bag summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub bag: Vec<Fragment>,
    pub weight: f64,
    pub value: f64,
    pub bag_limit: f64,
    pub space_left: f64,
    /// Difficulty of the AI seat, `None` for humans.
    pub ai: Option<Difficulty>,
}

impl PlayerSnapshot {
    pub(crate) fn new(player: &Player, ai: Option<Difficulty>) -> Self {
        Self {
            name: player.name().to_string(),
            bag: player.bag().to_vec(),
            weight: player.current_weight(),
            value: player.total_value(),
            bag_limit: player.bag_limit(),
            space_left: player.space_left(),
            ai,
        }
    }
}

/// One pool item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemSnapshot {
    pub name: String,
    pub weight: u32,
    pub value: f64,
    pub original_weight: u32,
    pub original_value: f64,
    pub ratio: f64,
}

impl From<&Item> for ItemSnapshot {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name().to_string(),
            weight: item.weight(),
            value: item.value(),
            original_weight: item.original_weight(),
            original_value: item.original_value(),
            ratio: item.ratio(),
        }
    }
}

/// Full engine view at one point in time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub players: Vec<PlayerSnapshot>,
    pub available_items: Vec<ItemSnapshot>,
    pub current_player: usize,
    pub turn_number: u32,
    pub game_over: bool,
    /// Winner's name; `None` while playing or on a draw.
    pub winner: Option<String>,
}

impl GameSnapshot {
    /// The player whose turn it is, if a game is running.
    #[must_use]
    pub fn current(&self) -> Option<&PlayerSnapshot> {
        self.players.get(self.current_player)
    }
}
