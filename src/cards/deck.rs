//! Deck generation and dealing.
//!
//! `generate_deck` builds `count` cards with ids `card-1..=card-count`,
//! cycling through a roster of names and image hints and drawing each stat
//! from its schema range. `deal_cards` shuffles a copy of the deck and deals
//! it round-robin.

use super::card::{Card, CardId};
use super::hand::Hand;
use super::stats::STAT_TABLE;
use crate::core::GameRng;

/// Image used when a hint has no dedicated picture.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/300x400.png";

const ROSTER: [&str; 20] = [
    "Virat K.", "Rohit S.", "Jasprit B.", "Kane W.", "Steve S.",
    "Pat C.", "Babar A.", "Shaheen A.", "Joe R.", "Ben S.",
    "Rashid K.", "Hardik P.", "Shubman G.", "Suryakumar Y.", "Ravindra J.",
    "Mohammed S.", "Kuldeep Y.", "Glenn M.", "David W.", "Mitchell S.",
];

const IMAGE_HINTS: [&str; 20] = [
    "cricket player", "batsman action", "bowler action", "cricket stadium", "cricket celebration",
    "wicketkeeper action", "cricket match", "team huddle", "cricket pitch", "sports athlete",
    "cricket bat", "cricket ball", "cricket game", "action shot", "sports crowd",
    "player portrait", "cricket equipment", "fielding action", "umpire signal", "victory moment",
];

const HINT_IMAGES: [(&str, &str); 5] = [
    (
        "sports athlete",
        "https://images.unsplash.com/photo-1479741789870-7e3f31a2ed07?fit=max&fm=jpg&q=80&w=1080",
    ),
    (
        "wicketkeeper action",
        "https://images.unsplash.com/photo-1490775696818-7832285c7240?fit=max&fm=jpg&q=80&w=1080",
    ),
    (
        "cricket pitch",
        "https://images.unsplash.com/photo-1531415074968-036ba1b575da?fit=max&fm=jpg&q=80&w=1080",
    ),
    (
        "team huddle",
        "https://images.unsplash.com/photo-1600880292089-90a7e086ee0c?fit=max&fm=jpg&q=80&w=1080",
    ),
    (
        "cricket celebration",
        "https://images.unsplash.com/photo-1527529482837-4698179dc6ce?fit=max&fm=jpg&q=80&w=1080",
    ),
];

fn image_for(hint: &str) -> &'static str {
    HINT_IMAGES
        .iter()
        .find(|(h, _)| *h == hint)
        .map_or(PLACEHOLDER_IMAGE, |(_, url)| *url)
}

/// Generate `count` cards with every schema stat populated.
///
/// Names repeat with an edition suffix once the roster is exhausted
/// (`Virat K. #1`, then `Virat K. #2` twenty cards later).
pub fn generate_deck(count: usize, rng: &mut GameRng) -> Vec<Card> {
    (0..count)
        .map(|i| {
            let name = format!("{} #{}", ROSTER[i % ROSTER.len()], i / ROSTER.len() + 1);
            let hint = IMAGE_HINTS[i % IMAGE_HINTS.len()];

            let mut card = Card::new(CardId::new(i as u32 + 1), name)
                .with_image(image_for(hint), hint);
            for meta in &STAT_TABLE {
                card = card.with_stat(meta.kind, rng.gen_range(meta.range.clone()));
            }
            card
        })
        .collect()
}

/// Shuffle a copy of `deck` and deal it round-robin into `num_players` hands.
///
/// Hand sizes differ by at most one; the input deck is left untouched.
pub fn deal_cards(deck: &[Card], num_players: usize, rng: &mut GameRng) -> Vec<Hand> {
    if num_players == 0 {
        return Vec::new();
    }

    let mut shuffled = deck.to_vec();
    rng.shuffle(&mut shuffled);

    let mut piles: Vec<Vec<Card>> = vec![Vec::new(); num_players];
    for (i, card) in shuffled.into_iter().enumerate() {
        piles[i % num_players].push(card);
    }

    piles.into_iter().map(Hand::new).collect()
}
