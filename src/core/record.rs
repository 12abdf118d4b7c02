//! Round history: what was compared and who came out ahead.
//!
//! One `RoundRecord` is appended to the match history per resolved round,
//! for replay, debugging and end-of-match summaries.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use crate::cards::{CardId, StatKind};

/// How a round ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The winner kept their card and took the loser's.
    Won {
        winner: PlayerId,
        loser: PlayerId,
        /// The loser's card, now at the bottom of the winner's hand.
        taken: CardId,
        winning_value: i64,
        losing_value: i64,
    },
    /// Equal values: both cards went to the bottom of their owners' hands.
    Drawn { value: i64 },
    /// The round could not be compared and counts as a draw.
    Voided { reason: String },
}

impl RoundOutcome {
    /// Round winner, if there was one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            RoundOutcome::Won { winner, .. } => Some(*winner),
            RoundOutcome::Drawn { .. } | RoundOutcome::Voided { .. } => None,
        }
    }
}

/// A resolved round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (starts at 1).
    pub round: u32,

    /// Player who led the round.
    pub leader: PlayerId,

    /// Stat the round was played on.
    pub stat: Option<StatKind>,

    pub outcome: RoundOutcome,
}

impl RoundRecord {
    #[must_use]
    pub fn new(round: u32, leader: PlayerId, stat: Option<StatKind>, outcome: RoundOutcome) -> Self {
        Self {
            round,
            leader,
            stat,
            outcome,
        }
    }
}

/// Round-result notification for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundNotice {
    pub round: u32,
    pub title: String,
    pub description: String,
}
