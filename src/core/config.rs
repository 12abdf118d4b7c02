//! Match configuration.
//!
//! Deck size, pacing delays, the turn countdown, player names and the RNG
//! seed. Defaults reproduce the standard five-cards-each match.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Seats in a match: the local user and one scripted opponent.
pub const PLAYER_COUNT: usize = 2;

/// Match configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Cards dealt to each player. The deck holds `cards_per_player * PLAYER_COUNT`.
    pub cards_per_player: usize,

    /// Opponent "thinking" delay before it plays, in milliseconds.
    pub opponent_delay_ms: u64,

    /// Time both cards stay face up before the round resolves, in milliseconds.
    pub reveal_delay_ms: u64,

    /// Delay before `round_over` advances on its own.
    /// `None` waits for an explicit next-round call.
    pub auto_advance_ms: Option<u64>,

    /// Local-user countdown per action, in seconds.
    pub turn_timeout_secs: u32,

    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Display name of the local user.
    pub local_name: String,

    /// Display name of the scripted opponent.
    pub opponent_name: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            cards_per_player: 5,
            opponent_delay_ms: 1000,
            reveal_delay_ms: 1000,
            auto_advance_ms: Some(2000),
            turn_timeout_secs: 10,
            seed: None,
            local_name: "You".to_string(),
            opponent_name: "Opponent".to_string(),
        }
    }
}

impl MatchConfig {
    /// Set the number of cards each player is dealt.
    pub fn with_cards_per_player(mut self, count: usize) -> Self {
        self.cards_per_player = count;
        self
    }

    /// Set a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the opponent and reveal delays.
    pub fn with_delays(mut self, opponent_ms: u64, reveal_ms: u64) -> Self {
        self.opponent_delay_ms = opponent_ms;
        self.reveal_delay_ms = reveal_ms;
        self
    }

    /// Set or disable the round-over auto advance.
    pub fn with_auto_advance(mut self, delay_ms: Option<u64>) -> Self {
        self.auto_advance_ms = delay_ms;
        self
    }

    /// Set the local-user countdown.
    pub fn with_turn_timeout(mut self, secs: u32) -> Self {
        self.turn_timeout_secs = secs;
        self
    }

    /// Set both display names.
    pub fn with_names(mut self, local: impl Into<String>, opponent: impl Into<String>) -> Self {
        self.local_name = local.into();
        self.opponent_name = opponent.into();
        self
    }

    /// Total cards in play.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.cards_per_player * PLAYER_COUNT
    }

    /// Countdown length in milliseconds.
    #[must_use]
    pub fn turn_timeout_ms(&self) -> u64 {
        u64::from(self.turn_timeout_secs) * 1000
    }

    /// Check the configuration can drive a match.
    ///
    /// Zero delays are refused: a timer due immediately could re-arm itself
    /// inside a single `tick`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cards_per_player == 0 {
            return Err(ConfigError::NoCards);
        }
        if self.opponent_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay("opponent_delay_ms"));
        }
        if self.reveal_delay_ms == 0 {
            return Err(ConfigError::ZeroDelay("reveal_delay_ms"));
        }
        if self.auto_advance_ms == Some(0) {
            return Err(ConfigError::ZeroDelay("auto_advance_ms"));
        }
        if self.turn_timeout_secs == 0 {
            return Err(ConfigError::ZeroDelay("turn_timeout_secs"));
        }
        if self.local_name.trim().is_empty() || self.opponent_name.trim().is_empty() {
            return Err(ConfigError::BlankName);
        }
        Ok(())
    }
}
