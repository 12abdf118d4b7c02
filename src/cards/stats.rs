//! Stat schema: which stats a card carries, how they are labelled, the
//! range each is drawn from, and which direction wins a comparison.
//!
//! Direction lives in one declarative table (`StatMeta`) consulted by
//! `StatKind::rank`; nothing else in the crate special-cases a stat.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::ops::Range;

/// A stat a card can be challenged on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatKind {
    Runs,
    BattingAverage,
    BowlingAverage,
    Wickets,
    BattingStrikerate,
    BowlingStrikerate,
    Centuries,
    HalfCenturies,
    OversBowled,
}

/// Static description of one stat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatMeta {
    pub kind: StatKind,
    /// Wire key (matches the serde name).
    pub key: &'static str,
    /// Display label.
    pub label: &'static str,
    /// `false` for stats where the smaller value wins.
    pub higher_is_better: bool,
    /// Generated values fall in `[start, end)`.
    pub range: Range<i64>,
}

const fn meta(
    kind: StatKind,
    key: &'static str,
    label: &'static str,
    higher_is_better: bool,
    range: Range<i64>,
) -> StatMeta {
    StatMeta {
        kind,
        key,
        label,
        higher_is_better,
        range,
    }
}

/// The schema, in display order.
pub static STAT_TABLE: [StatMeta; 9] = [
    meta(StatKind::Runs, "runs", "Runs", true, 50..1050),
    meta(StatKind::BattingAverage, "battingAverage", "Batting Avg", true, 15..65),
    meta(StatKind::BowlingAverage, "bowlingAverage", "Bowling Avg", false, 15..45),
    meta(StatKind::Wickets, "wickets", "Wickets", true, 10..160),
    meta(StatKind::BattingStrikerate, "battingStrikerate", "Batting SR", true, 60..160),
    meta(StatKind::BowlingStrikerate, "bowlingStrikerate", "Bowling SR", false, 12..42),
    meta(StatKind::Centuries, "centuries", "100s", true, 0..30),
    meta(StatKind::HalfCenturies, "halfCenturies", "50s", true, 0..60),
    meta(StatKind::OversBowled, "oversBowled", "Overs Bowled", true, 0..1200),
];

impl StatKind {
    /// Every stat in the schema, in display order.
    pub const ALL: [StatKind; 9] = [
        StatKind::Runs,
        StatKind::BattingAverage,
        StatKind::BowlingAverage,
        StatKind::Wickets,
        StatKind::BattingStrikerate,
        StatKind::BowlingStrikerate,
        StatKind::Centuries,
        StatKind::HalfCenturies,
        StatKind::OversBowled,
    ];

    /// Table entry for this stat.
    #[must_use]
    pub fn meta(self) -> &'static StatMeta {
        // Table rows are declared in `ALL` order.
        &STAT_TABLE[self as usize]
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.meta().label
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        self.meta().key
    }

    #[must_use]
    pub fn higher_is_better(self) -> bool {
        self.meta().higher_is_better
    }

    /// Compare two raw values of this stat.
    ///
    /// `Greater` means `a` beats `b`, `Less` means `b` beats `a`, `Equal` is a
    /// tie regardless of direction.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use squad_ace::cards::StatKind;
    ///
    /// assert_eq!(StatKind::Runs.rank(80, 60), Ordering::Greater);
    /// assert_eq!(StatKind::BowlingAverage.rank(18, 25), Ordering::Greater);
    /// ```
    #[must_use]
    pub fn rank(self, a: i64, b: i64) -> Ordering {
        let raw = a.cmp(&b);
        if self.higher_is_better() {
            raw
        } else {
            raw.reverse()
        }
    }
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A card's stat values.
pub type Stats = FxHashMap<StatKind, i64>;
