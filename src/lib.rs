//! # squad-ace
//!
//! Match engine for a two-player stat-battle card game with cricket player
//! cards ("Top Trumps" style).
//!
//! Each round the leader commits their top card and names a stat; the other
//! player answers with their top card. The better value on that stat takes
//! the loser's card. Some stats (bowling average, bowling strike rate) are
//! better when lower. A player holding the whole deck, or facing an opponent
//! with no cards, wins.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: the turn engine is a reducer,
//!    `reduce(&state, &event, &mut rng) -> Result<Transition, Rejection>`.
//!    A rejected event leaves the state untouched.
//!
//! 2. **Injected time**: delays (opponent thinking, reveal, auto-advance,
//!    turn countdown) are cancelable timers on a `Clock`, so tests drive a
//!    match with a `ManualClock` instead of sleeping.
//!
//! 3. **Reproducible**: every random choice flows through one seeded
//!    `GameRng`.
//!
//! ## Modules
//!
//! - `core`: players, RNG, configuration, phases, match state, errors
//! - `cards`: stat schema, cards, hands, deck generation and dealing
//! - `rules`: match setup, the reducer, round resolution, the scripted opponent
//! - `engine`: clock, timers and `MatchEngine`

pub mod cards;
pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameRng, MatchConfig, MatchState, Phase, Player, PlayerId, PlayerMap, Rejection,
    RoundNotice, RoundOutcome, RoundRecord, Selection,
};

pub use crate::cards::{Card, CardId, Hand, StatKind, StatMeta, STAT_TABLE};

pub use crate::rules::{reduce, Event, Transition};

pub use crate::engine::{Clock, ManualClock, MatchEngine, SystemClock, TimerKind};
