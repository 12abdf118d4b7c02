//! Cards: identity, display data and stat values.
//!
//! Cards never change after generation. Rounds move them between hands but
//! do not touch their contents.

use serde::{Deserialize, Serialize};

use super::stats::{StatKind, Stats};

/// Unique card identifier within a deck. Displays as `card-N`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card-{}", self.0)
    }
}

/// A playing card.
///
/// ## Example
///
/// ```
/// use squad_ace::cards::{Card, CardId, StatKind};
///
/// let card = Card::new(CardId::new(1), "Virat K. #1")
///     .with_stat(StatKind::Runs, 820)
///     .with_stat(StatKind::Wickets, 12);
///
/// assert_eq!(card.stat(StatKind::Runs), Some(820));
/// assert_eq!(card.stat(StatKind::Centuries), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub name: String,
    /// Image URL.
    pub image: String,
    /// Short description of what the image shows.
    pub image_hint: String,
    pub stats: Stats,
}

impl Card {
    /// Create a card with no stats and a placeholder image.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: String::from(super::deck::PLACEHOLDER_IMAGE),
            image_hint: String::new(),
            stats: Stats::default(),
        }
    }

    /// Set a stat value (builder pattern).
    #[must_use]
    pub fn with_stat(mut self, kind: StatKind, value: i64) -> Self {
        self.stats.insert(kind, value);
        self
    }

    /// Set the image and its hint (builder pattern).
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>, hint: impl Into<String>) -> Self {
        self.image = image.into();
        self.image_hint = hint.into();
        self
    }

    /// Raw value of a stat, if the card carries it.
    #[must_use]
    pub fn stat(&self, kind: StatKind) -> Option<i64> {
        self.stats.get(&kind).copied()
    }

    /// Stats present on this card, in schema order.
    pub fn stat_kinds(&self) -> impl Iterator<Item = StatKind> + '_ {
        StatKind::ALL
            .into_iter()
            .filter(|k| self.stats.contains_key(k))
    }

    /// Check the card carries every stat in the schema.
    #[must_use]
    pub fn has_full_schema(&self) -> bool {
        StatKind::ALL.iter().all(|k| self.stats.contains_key(k))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
