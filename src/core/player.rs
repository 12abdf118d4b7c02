//! Seats and the people (or scripts) sitting in them.
//!
//! Seat 0 is always the local user and seat 1 the scripted opponent.
//! `PlayerMap` stores one value per seat in seat order.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::Hand;

const DEFAULT_AVATAR: &str = "https://placehold.co/100x100.png";

/// Seat identifier. Displays as `player1`, `player2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    pub const LOCAL: PlayerId = PlayerId(0);
    pub const OPPONENT: PlayerId = PlayerId(1);

    #[must_use]
    pub const fn new(seat: u8) -> Self {
        Self(seat)
    }

    /// Zero-based seat index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player{}", u16::from(self.0) + 1)
    }
}

/// One value per seat.
///
/// ```
/// use squad_ace::core::{PlayerId, PlayerMap};
///
/// let mut wins = PlayerMap::from_vec(vec![0u32, 0]);
/// wins[PlayerId::OPPONENT] += 1;
/// assert_eq!(wins.get(PlayerId::OPPONENT), Some(&1));
/// assert_eq!(wins.get(PlayerId::new(4)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerMap<T> {
    seats: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Seat the values in order: the first is `player1`.
    ///
    /// # Panics
    ///
    /// Panics on an empty list or more seats than a `u8` can number.
    pub fn from_vec(seats: Vec<T>) -> Self {
        assert!(!seats.is_empty(), "a match needs at least one seat");
        assert!(seats.len() <= usize::from(u8::MAX), "too many seats");
        Self { seats }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.len()
    }

    /// Entry for a seat, or `None` if the seat does not exist.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.seats.get(player.index())
    }

    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.seats.get_mut(player.index())
    }

    /// Entries in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.seats.iter()
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.seats.len()).filter_map(|i| u8::try_from(i).ok().map(PlayerId))
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &T {
        &self.seats[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.seats[player.index()]
    }
}

/// Someone at the table. Only `hand` changes once the match is dealt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub avatar_url: String,
    /// Exactly one player in a match is the local user; the other is scripted.
    pub is_local_user: bool,
    pub hand: Hand,
}

impl Player {
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, is_local_user: bool, hand: Hand) -> Self {
        Self {
            id,
            name: name.into(),
            avatar_url: DEFAULT_AVATAR.to_string(),
            is_local_user,
            hand,
        }
    }

    #[must_use]
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = url.into();
        self
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len()
    }
}
