//! Cancelable delayed steps.
//!
//! A `TimerSet` holds at most one pending timer per `TimerKind`. Timers are
//! plain deadlines: nothing runs on its own. The driver asks `pop_due` for
//! whatever has expired, and a timer is removed before it is handed out, so
//! it can never fire twice.
//!
//! Pausing freezes every armed timer into its remaining time; thawing re-arms
//! it from the thaw instant with exactly that remaining time.

use crate::rules::Event;

/// The delayed steps a match can have pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Opponent "thinking" delay.
    Opponent,
    /// Reveal to resolution.
    Reveal,
    /// Round over to the next round.
    Advance,
    /// Local user's countdown.
    TurnTimeout,
}

impl TimerKind {
    pub const ALL: [TimerKind; 4] = [
        TimerKind::Opponent,
        TimerKind::Reveal,
        TimerKind::Advance,
        TimerKind::TurnTimeout,
    ];

    /// Event dispatched when this timer fires.
    #[must_use]
    pub const fn event(self) -> Event {
        match self {
            TimerKind::Opponent => Event::OpponentMove,
            TimerKind::Reveal => Event::RevealElapsed,
            TimerKind::Advance => Event::AdvanceRound,
            TimerKind::TurnTimeout => Event::TurnTimeout,
        }
    }

    const fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    Armed { deadline: u64 },
    Frozen { remaining: u64 },
}

/// One slot per timer kind.
#[derive(Clone, Debug, Default)]
pub struct TimerSet {
    slots: [Option<Slot>; 4],
}

impl TimerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `kind` to fire `delay_ms` after `now`, replacing any pending one.
    pub fn schedule(&mut self, kind: TimerKind, now: u64, delay_ms: u64) {
        let deadline = now.saturating_add(delay_ms);
        if self.slots[kind.slot()].is_some() {
            log::debug!("timer {kind:?} replaced");
        }
        self.slots[kind.slot()] = Some(Slot::Armed { deadline });
        log::debug!("timer {kind:?} scheduled for {deadline}ms");
    }

    /// Drop a pending timer. Returns whether one was pending.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        self.slots[kind.slot()].take().is_some()
    }

    /// Drop every pending timer.
    pub fn cancel_all(&mut self) {
        for kind in TimerKind::ALL {
            if self.cancel(kind) {
                log::debug!("timer {kind:?} cancelled");
            }
        }
    }

    /// Capture the remaining time of every armed timer.
    pub fn freeze(&mut self, now: u64) {
        for slot in self.slots.iter_mut().flatten() {
            if let Slot::Armed { deadline } = *slot {
                *slot = Slot::Frozen {
                    remaining: deadline.saturating_sub(now),
                };
            }
        }
    }

    /// Re-arm every frozen timer with its captured remaining time.
    pub fn thaw(&mut self, now: u64) {
        for slot in self.slots.iter_mut().flatten() {
            if let Slot::Frozen { remaining } = *slot {
                *slot = Slot::Armed {
                    deadline: now.saturating_add(remaining),
                };
            }
        }
    }

    /// Remove and return the earliest armed timer due at `now`.
    ///
    /// Ties go to the kind declared first.
    pub fn pop_due(&mut self, now: u64) -> Option<TimerKind> {
        let kind = TimerKind::ALL
            .into_iter()
            .filter_map(|kind| match self.slots[kind.slot()] {
                Some(Slot::Armed { deadline }) if deadline <= now => Some((deadline, kind)),
                _ => None,
            })
            .min_by_key(|&(deadline, kind)| (deadline, kind.slot()))
            .map(|(_, kind)| kind)?;

        self.slots[kind.slot()] = None;
        Some(kind)
    }

    /// Milliseconds until `kind` fires (frozen timers report their captured time).
    #[must_use]
    pub fn remaining(&self, kind: TimerKind, now: u64) -> Option<u64> {
        self.slots[kind.slot()].map(|slot| match slot {
            Slot::Armed { deadline } => deadline.saturating_sub(now),
            Slot::Frozen { remaining } => remaining,
        })
    }

    /// Earliest deadline among armed timers.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Some(Slot::Armed { deadline }) => Some(*deadline),
                _ => None,
            })
            .min()
    }

    #[must_use]
    pub fn is_pending(&self, kind: TimerKind) -> bool {
        self.slots[kind.slot()].is_some()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}
