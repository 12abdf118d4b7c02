//! A player's ordered hand.
//!
//! Index 0 is the top card, the only one that may be played. Cards that
//! survive a round go to the bottom, so a hand rotates like a queue.
//! Backed by `im::Vector` so cloning a match state shares the hands.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vector<Card>,
}

impl Hand {
    #[must_use]
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// The card that would be played next.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.iter().any(|c| c.id == id)
    }

    /// Remove a card wherever it sits. Returns `None` if it is not held.
    pub fn take(&mut self, id: CardId) -> Option<Card> {
        let pos = self.cards.iter().position(|c| c.id == id)?;
        Some(self.cards.remove(pos))
    }

    /// Append a card at the bottom.
    pub fn push_bottom(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Move a held card to the bottom. Returns `false` if it is not held.
    pub fn rotate_to_bottom(&mut self, id: CardId) -> bool {
        match self.take(id) {
            Some(card) => {
                self.push_bottom(card);
                true
            }
            None => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card ids from top to bottom.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::new(iter)
    }
}
