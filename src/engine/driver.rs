//! The match engine: state, randomness, time and scheduled steps in one place.
//!
//! `MatchEngine` is what a presentation layer talks to. User intents go in
//! through the entry points; the host calls `tick` regularly (or sleeps until
//! `next_deadline`) so delayed steps can fire. Every change of state goes
//! through the reducer, and after each accepted change the pending timers
//! are rebuilt for the new phase.
//!
//! ## Timers per phase
//!
//! | Phase | Timer |
//! |---|---|
//! | opponent phases | `Opponent` after `opponent_delay_ms` |
//! | `reveal` | `Reveal` after `reveal_delay_ms` |
//! | `round_over` | `Advance` after `auto_advance_ms`; if unset, after `reveal_delay_ms` once the match is decided |
//! | local-user phases | `TurnTimeout` after `turn_timeout_secs` |
//!
//! ## Example
//!
//! ```
//! use squad_ace::core::{MatchConfig, Phase, PlayerId};
//! use squad_ace::engine::{ManualClock, MatchEngine};
//!
//! let clock = ManualClock::new();
//! let config = MatchConfig::default().with_seed(9);
//! let mut engine = MatchEngine::with_clock(config, "alpha", clock.clone()).unwrap();
//!
//! engine.start_game().unwrap();
//! engine.complete_toss(PlayerId::OPPONENT).unwrap();
//! assert_eq!(engine.state().phase, Phase::OpponentTurnSelectCardAndStat);
//!
//! clock.advance(1000);
//! engine.tick();
//! assert_eq!(engine.state().phase, Phase::PlayerTurnRespondToOpponentChallenge);
//! assert_eq!(engine.countdown(), Some(10));
//! ```

use super::clock::{Clock, SystemClock};
use super::timers::{TimerKind, TimerSet};
use crate::cards::StatKind;
use crate::core::{
    ConfigError, GameRng, MatchConfig, MatchState, Phase, PlayerId, Rejection, RoundNotice,
};
use crate::rules::{detect_game_over, initialize_match, reduce, Event};

/// Owns one match and drives it through time.
#[derive(Debug)]
pub struct MatchEngine<C: Clock = SystemClock> {
    config: MatchConfig,
    rng: GameRng,
    clock: C,
    state: MatchState,
    timers: TimerSet,
    notices: Vec<RoundNotice>,
}

impl MatchEngine<SystemClock> {
    /// Create an engine on the system clock, with the match in the lobby.
    pub fn new(config: MatchConfig, match_id: &str) -> Result<Self, ConfigError> {
        Self::with_clock(config, match_id, SystemClock::new())
    }
}

impl<C: Clock> MatchEngine<C> {
    /// Create an engine on an injected clock, with the match in the lobby.
    pub fn with_clock(config: MatchConfig, match_id: &str, clock: C) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        log::info!("match engine seeded with {}", rng.seed());
        let state = initialize_match(match_id, &config, &mut rng);

        Ok(Self {
            config,
            rng,
            clock,
            state,
            timers: TimerSet::new(),
            notices: Vec::new(),
        })
    }

    /// Deal a brand new match, dropping every pending timer and notice.
    pub fn initialize_match(&mut self, match_id: &str) -> &MatchState {
        self.timers.cancel_all();
        self.notices.clear();
        self.state = initialize_match(match_id, &self.config, &mut self.rng);
        &self.state
    }

    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    #[must_use]
    pub fn timers(&self) -> &TimerSet {
        &self.timers
    }

    /// Seed of the engine's RNG; replaying with it reproduces the session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn start_game(&mut self) -> Result<(), Rejection> {
        self.dispatch(Event::StartGame)
    }

    /// Flip a fair coin and complete the toss with its result.
    ///
    /// The coin is flipped even if the toss is then rejected.
    pub fn toss(&mut self) -> Result<PlayerId, Rejection> {
        let winner = if self.rng.gen_bool(0.5) {
            self.state.local_player()
        } else {
            self.state.opponent_player()
        };
        self.complete_toss(winner)?;
        Ok(winner)
    }

    pub fn complete_toss(&mut self, winner: PlayerId) -> Result<(), Rejection> {
        self.dispatch(Event::CompleteToss { winner })
    }

    pub fn play_top_card(&mut self) -> Result<(), Rejection> {
        self.dispatch(Event::PlayTopCard)
    }

    pub fn select_stat(&mut self, stat: StatKind) -> Result<(), Rejection> {
        self.dispatch(Event::SelectStat(stat))
    }

    pub fn advance_to_next_round(&mut self) -> Result<(), Rejection> {
        self.dispatch(Event::AdvanceRound)
    }

    pub fn toggle_pause(&mut self) -> Result<(), Rejection> {
        self.dispatch(Event::TogglePause)
    }

    /// Fire every timer that is due, earliest first. Returns how many fired.
    ///
    /// A fired timer whose event no longer fits the match is dropped.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now_ms();
        let mut fired = 0;

        while let Some(kind) = self.timers.pop_due(now) {
            fired += 1;
            log::debug!("timer {kind:?} fired at {now}ms");
            if let Err(rejection) = self.dispatch(kind.event()) {
                log::debug!("timer {kind:?} dropped: {rejection}");
            }
        }

        fired
    }

    /// Whole seconds left on the local user's countdown, rounded up.
    ///
    /// Frozen while paused. `None` when no countdown is running.
    #[must_use]
    pub fn countdown(&self) -> Option<u32> {
        self.timers
            .remaining(TimerKind::TurnTimeout, self.clock.now_ms())
            .map(|ms| u32::try_from(ms.div_ceil(1000)).unwrap_or(u32::MAX))
    }

    /// Clock time at which the next armed timer fires.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// Drain round notices produced since the last call.
    pub fn take_notices(&mut self) -> Vec<RoundNotice> {
        std::mem::take(&mut self.notices)
    }

    fn dispatch(&mut self, event: Event) -> Result<(), Rejection> {
        let transition = reduce(&self.state, &event, &mut self.rng)?;
        let prev = std::mem::replace(&mut self.state, transition.state);
        if let Some(notice) = transition.notice {
            self.notices.push(notice);
        }

        let now = self.clock.now_ms();
        if prev.paused != self.state.paused {
            if self.state.paused {
                self.timers.freeze(now);
            } else {
                self.timers.thaw(now);
            }
        }

        if prev.phase != self.state.phase
            || prev.turn_player != self.state.turn_player
            || prev.round_number != self.state.round_number
        {
            self.reschedule(now);
        }
        Ok(())
    }

    /// Replace all pending timers with the ones the current phase needs.
    fn reschedule(&mut self, now: u64) {
        self.timers.cancel_all();

        let phase = self.state.phase;
        let timer = match phase {
            p if p.awaits_opponent() => Some((TimerKind::Opponent, self.config.opponent_delay_ms)),
            p if p.awaits_local_user() => {
                Some((TimerKind::TurnTimeout, self.config.turn_timeout_ms()))
            }
            Phase::Reveal => Some((TimerKind::Reveal, self.config.reveal_delay_ms)),
            // A decided match ends on its own even without auto-advance.
            Phase::RoundOver => self
                .config
                .auto_advance_ms
                .or_else(|| {
                    detect_game_over(&self.state).map(|_| self.config.reveal_delay_ms)
                })
                .map(|delay| (TimerKind::Advance, delay)),
            _ => None,
        };

        if let Some((kind, delay)) = timer {
            self.timers.schedule(kind, now, delay);
        }
    }
}
