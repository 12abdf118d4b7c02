//! Diagnostics for ignored actions and invalid configuration.
//!
//! Gameplay never fails hard: an action that does not fit the current phase
//! or turn is refused with a `Rejection` and the match state is left exactly
//! as it was. Callers are free to drop the rejection.

use thiserror::Error;

use super::phase::Phase;
use super::player::PlayerId;

/// Why the engine ignored an action.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Rejection {
    #[error("{action} is not allowed during {phase}")]
    WrongPhase { action: &'static str, phase: Phase },
    #[error("{action} attempted out of turn")]
    OutOfTurn { action: &'static str },
    #[error("{action} ignored while paused")]
    Paused { action: &'static str },
    #[error("{player} has no cards to play")]
    EmptyHand { player: PlayerId },
    #[error("no challenge stat has been chosen")]
    NoChallengeStat,
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error("the game is over")]
    GameOver,
}

/// Invalid `MatchConfig`.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ConfigError {
    #[error("cards_per_player must be at least 1")]
    NoCards,
    #[error("{0} must be greater than zero")]
    ZeroDelay(&'static str),
    #[error("player names must not be blank")]
    BlankName,
}
