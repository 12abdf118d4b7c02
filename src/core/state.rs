//! Match state: the authoritative record the presentation layer renders.
//!
//! ## MatchState
//!
//! - Players and their hands
//! - The canonical deck (every card in play; used to detect a clean sweep)
//! - Phase, initiative and the player whose action is awaited
//! - The current round's selections and challenge stat
//! - Status message, winner, pause flag, round history
//!
//! Hands and the deck use `im` persistent vectors, so the reducer can clone
//! the state on every step without copying cards.
//!
//! ## Invariant
//!
//! The hands together always hold exactly the canonical deck. Committed
//! cards stay in their owner's hand until the round resolves.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::phase::Phase;
use super::player::{Player, PlayerId, PlayerMap};
use super::record::RoundRecord;
use crate::cards::{Card, Hand, StatKind};

/// A card committed by a player for the current round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub player: PlayerId,
    pub card: Card,
}

impl Selection {
    #[must_use]
    pub fn new(player: PlayerId, card: Card) -> Self {
        Self { player, card }
    }
}

/// Message shown before the match starts.
pub const WELCOME_MESSAGE: &str = "Welcome to Squad Ace! Click \"Start Game\" to begin.";

/// Full match state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    /// Squad/match identifier.
    pub match_id: String,

    pub players: PlayerMap<Player>,

    /// Every card dealt at the start of the match.
    pub deck: Vector<Card>,

    /// Player who leads the current (or next) round.
    pub initiative: Option<PlayerId>,

    /// Player whose action is awaited.
    pub turn_player: Option<PlayerId>,

    pub phase: Phase,

    /// Committed cards for this round: empty, the leader's, or both.
    pub selections: SmallVec<[Selection; 2]>,

    /// Challenge stat for this round.
    pub stat: Option<StatKind>,

    /// Human-readable status line.
    pub message: String,

    /// Set once, when the match ends.
    pub winner: Option<PlayerId>,

    pub invite_code: String,

    /// Winner of the last resolved round; `None` after a draw or before the
    /// first round.
    pub last_round_winner: Option<PlayerId>,

    pub paused: bool,

    /// Rounds started so far.
    pub round_number: u32,

    pub history: Vector<RoundRecord>,
}

impl MatchState {
    /// Create a lobby state from seated players and the deck they were dealt.
    ///
    /// # Panics
    ///
    /// Panics if `players` is empty or holds more than 255 seats.
    #[must_use]
    pub fn new(match_id: impl Into<String>, players: Vec<Player>, deck: Vector<Card>) -> Self {
        let match_id = match_id.into();
        let invite_code = invite_code_for(&match_id);

        Self {
            match_id,
            players: PlayerMap::from_vec(players),
            deck,
            initiative: None,
            turn_player: None,
            phase: Phase::Lobby,
            selections: SmallVec::new(),
            stat: None,
            message: WELCOME_MESSAGE.to_string(),
            winner: None,
            invite_code,
            last_round_winner: None,
            paused: false,
            round_number: 0,
            history: Vector::new(),
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Get a player, or `None` for an unknown seat.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    /// Get a player's hand, or `None` for an unknown seat.
    #[must_use]
    pub fn hand(&self, id: PlayerId) -> Option<&Hand> {
        self.players.get(id).map(|p| &p.hand)
    }

    pub(crate) fn hand_mut(&mut self, id: PlayerId) -> Option<&mut Hand> {
        self.players.get_mut(id).map(|p| &mut p.hand)
    }

    /// Display name for a seat.
    #[must_use]
    pub fn name_of(&self, id: PlayerId) -> &str {
        self.players.get(id).map_or("Unknown", |p| p.name.as_str())
    }

    /// The local user's seat.
    #[must_use]
    pub fn local_player(&self) -> PlayerId {
        self.players
            .values()
            .find(|p| p.is_local_user)
            .map_or(PlayerId::LOCAL, |p| p.id)
    }

    /// The scripted opponent's seat.
    #[must_use]
    pub fn opponent_player(&self) -> PlayerId {
        self.opponent_of(self.local_player())
    }

    /// The other seat in a two-player match.
    #[must_use]
    pub fn opponent_of(&self, id: PlayerId) -> PlayerId {
        self.players
            .player_ids()
            .find(|&p| p != id)
            .unwrap_or(id)
    }

    #[must_use]
    pub fn is_local(&self, id: PlayerId) -> bool {
        self.players.get(id).is_some_and(|p| p.is_local_user)
    }

    /// Size of the canonical deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Cards held across all hands.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.players.values().map(Player::card_count).sum()
    }

    /// Selection committed by a player this round.
    #[must_use]
    pub fn selection_for(&self, id: PlayerId) -> Option<&Selection> {
        self.selections.iter().find(|s| s.player == id)
    }

    /// Check whether it is the local user's move.
    #[must_use]
    pub fn is_local_turn(&self) -> bool {
        self.phase.awaits_local_user() && self.turn_player == Some(self.local_player())
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

/// `SQD-` followed by the first four characters of the match id, upper-cased.
#[must_use]
pub fn invite_code_for(match_id: &str) -> String {
    let prefix: String = match_id.chars().take(4).collect();
    format!("SQD-{}", prefix.to_uppercase())
}
