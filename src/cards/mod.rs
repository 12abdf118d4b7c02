//! Card system: stat schema, cards, hands, deck generation and dealing.
//!
//! ## Key Types
//!
//! - `StatKind` / `StatMeta`: the stat schema and its comparison direction
//! - `CardId`, `Card`: immutable cards
//! - `Hand`: ordered cards, top card first
//! - `generate_deck`, `deal_cards`: deck generator and dealer

pub mod card;
pub mod deck;
pub mod hand;
pub mod stats;

pub use card::{Card, CardId};
pub use deck::{deal_cards, generate_deck, PLACEHOLDER_IMAGE};
pub use hand::Hand;
pub use stats::{StatKind, StatMeta, Stats, STAT_TABLE};
