//! Move records.
//!
//! Every consumed turn leaves a `MoveRecord`: a pick, an explicit skip, or an
//! AI seat that declined. The engine keeps them in an `im::Vector` so a
//! snapshot of the log is an O(1) clone.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;
use crate::items::Fragment;

/// A successful pick, as returned to the driver.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub player: PlayerId,
    /// Fraction of the item's remaining weight requested after clamping.
    pub fraction: f64,
    pub fragment: Fragment,
}

impl std::fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Added {:.2} of {}", self.fraction, self.fragment.name)
    }
}

/// What happened on a turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MoveKind {
    Pick { fraction: f64, fragment: Fragment },
    Skip,
    /// An AI seat found nothing to take or its move was rejected.
    Declined,
}

/// One consumed turn.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number (starts at 1).
    pub turn: u32,
    pub player: PlayerId,
    pub kind: MoveKind,
}

impl MoveRecord {
    #[must_use]
    pub fn is_pick(&self) -> bool {
        matches!(self.kind, MoveKind::Pick { .. })
    }
}

impl From<&MoveOutcome> for MoveKind {
    fn from(outcome: &MoveOutcome) -> Self {
        MoveKind::Pick {
            fraction: outcome.fraction,
            fragment: outcome.fragment.clone(),
        }
    }
}
