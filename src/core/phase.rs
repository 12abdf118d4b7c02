//! Match phases and the transition table.
//!
//! ```text
//! lobby -> toss -> player_turn_select_card -> player_turn_select_stat
//!                    -> opponent_turn_selecting_card -> reveal
//!               -> opponent_turn_select_card_and_stat
//!                    -> player_turn_respond_to_opponent_challenge -> reveal
//! reveal -> round_over -> (next round's select phase | game_over)
//! ```
//!
//! Phases where a player is asked to act may also jump straight to
//! `game_over` when that player has run out of cards.

use serde::{Deserialize, Serialize};

/// Current step of the match state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Lobby,
    Toss,
    /// Local user leads the round and must play their top card.
    PlayerTurnSelectCard,
    /// Local user has played and must pick the challenge stat.
    PlayerTurnSelectStat,
    /// Opponent is answering the local user's challenge.
    OpponentTurnSelectingCard,
    /// Opponent leads the round: plays its top card and picks a stat.
    OpponentTurnSelectCardAndStat,
    /// Local user must answer the opponent's challenge with their top card.
    PlayerTurnRespondToOpponentChallenge,
    Reveal,
    RoundOver,
    GameOver,
}

impl Phase {
    /// Every phase, in declaration order.
    pub const ALL: [Phase; 10] = [
        Phase::Lobby,
        Phase::Toss,
        Phase::PlayerTurnSelectCard,
        Phase::PlayerTurnSelectStat,
        Phase::OpponentTurnSelectingCard,
        Phase::OpponentTurnSelectCardAndStat,
        Phase::PlayerTurnRespondToOpponentChallenge,
        Phase::Reveal,
        Phase::RoundOver,
        Phase::GameOver,
    ];

    /// Wire name of the phase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::Lobby => "lobby",
            Phase::Toss => "toss",
            Phase::PlayerTurnSelectCard => "player_turn_select_card",
            Phase::PlayerTurnSelectStat => "player_turn_select_stat",
            Phase::OpponentTurnSelectingCard => "opponent_turn_selecting_card",
            Phase::OpponentTurnSelectCardAndStat => "opponent_turn_select_card_and_stat",
            Phase::PlayerTurnRespondToOpponentChallenge => {
                "player_turn_respond_to_opponent_challenge"
            }
            Phase::Reveal => "reveal",
            Phase::RoundOver => "round_over",
            Phase::GameOver => "game_over",
        }
    }

    /// Phases that may directly follow this one.
    #[must_use]
    pub const fn successors(self) -> &'static [Phase] {
        match self {
            Phase::Lobby => &[Phase::Toss],
            Phase::Toss => &[
                Phase::PlayerTurnSelectCard,
                Phase::OpponentTurnSelectCardAndStat,
            ],
            Phase::PlayerTurnSelectCard => &[Phase::PlayerTurnSelectStat, Phase::GameOver],
            Phase::PlayerTurnSelectStat => &[Phase::OpponentTurnSelectingCard],
            Phase::OpponentTurnSelectingCard => &[Phase::Reveal, Phase::GameOver],
            Phase::OpponentTurnSelectCardAndStat => &[
                Phase::PlayerTurnRespondToOpponentChallenge,
                Phase::GameOver,
            ],
            Phase::PlayerTurnRespondToOpponentChallenge => &[Phase::Reveal, Phase::GameOver],
            Phase::Reveal => &[Phase::RoundOver],
            Phase::RoundOver => &[
                Phase::PlayerTurnSelectCard,
                Phase::OpponentTurnSelectCardAndStat,
                Phase::GameOver,
            ],
            Phase::GameOver => &[],
        }
    }

    /// Check whether `next` may follow this phase.
    #[must_use]
    pub fn can_become(self, next: Phase) -> bool {
        self.successors().contains(&next)
    }

    /// The local user is expected to act (and the countdown runs).
    #[must_use]
    pub const fn awaits_local_user(self) -> bool {
        matches!(
            self,
            Phase::PlayerTurnSelectCard
                | Phase::PlayerTurnSelectStat
                | Phase::PlayerTurnRespondToOpponentChallenge
        )
    }

    /// The scripted opponent is expected to act.
    #[must_use]
    pub const fn awaits_opponent(self) -> bool {
        matches!(
            self,
            Phase::OpponentTurnSelectingCard | Phase::OpponentTurnSelectCardAndStat
        )
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
