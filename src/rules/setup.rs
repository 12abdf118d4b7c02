//! Match initialization: deck, deal, seats, lobby state.

use im::Vector;

use crate::cards::{deal_cards, generate_deck};
use crate::core::{GameRng, MatchConfig, MatchState, Player, PlayerId, PLAYER_COUNT};

const OPPONENT_AVATAR: &str =
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?fit=max&fm=jpg&q=80&w=1080";

/// Build a fresh lobby state for `match_id`.
///
/// Draws a per-match seed from `rng`, then generates the deck and deals it
/// from separate streams of that seed. Seat 0 is the local user and gets the
/// first hand; seat 1 is the scripted opponent.
pub fn initialize_match(match_id: &str, config: &MatchConfig, rng: &mut GameRng) -> MatchState {
    let match_rng = GameRng::new(rng.next_seed());

    let deck = generate_deck(config.deck_size(), &mut match_rng.for_context("deck"));
    let mut hands = deal_cards(&deck, PLAYER_COUNT, &mut match_rng.for_context("deal")).into_iter();

    let players = vec![
        Player::new(
            PlayerId::LOCAL,
            config.local_name.clone(),
            true,
            hands.next().unwrap_or_default(),
        ),
        Player::new(
            PlayerId::OPPONENT,
            config.opponent_name.clone(),
            false,
            hands.next().unwrap_or_default(),
        )
        .with_avatar(OPPONENT_AVATAR),
    ];

    log::info!(
        "match {match_id} initialized: {} cards, seed {}",
        deck.len(),
        match_rng.seed()
    );

    MatchState::new(match_id, players, deck.into_iter().collect::<Vector<_>>())
}
