//! Players and their bags.

pub mod player;

pub use player::{Pickup, Player, SPACE_EPSILON};
