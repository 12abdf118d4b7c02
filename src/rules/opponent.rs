//! Scripted opponent.
//!
//! The opponent always plays its top card. When it leads a round it picks
//! the challenge stat uniformly at random. The same pick stands in for the
//! local user when their stat countdown expires.

use crate::cards::{Card, StatKind};
use crate::core::GameRng;

/// Pick a challenge stat for `card`, uniformly over the stats it carries.
///
/// A card with no stats at all falls back to the full schema; the round
/// then resolves as voided.
pub fn choose_stat(card: &Card, rng: &mut GameRng) -> StatKind {
    let kinds: Vec<StatKind> = card.stat_kinds().collect();
    let pool: &[StatKind] = if kinds.is_empty() { &StatKind::ALL } else { &kinds };
    rng.choose(pool).copied().unwrap_or(StatKind::Runs)
}
