//! Round resolution and game-over detection.
//!
//! ## Resolution
//!
//! Both committed cards are compared on the round's stat using the stat's
//! direction. On a tie both cards go to the bottom of their owners' hands.
//! Otherwise the winner's card goes to the bottom of the winner's hand,
//! followed by the loser's card. A round that cannot be compared (missing
//! stat or selection) is voided and handled like a tie.
//!
//! ## Game over
//!
//! A player holding the whole deck wins. Failing that, in a two-player match
//! a player with no cards loses to the other.

use std::cmp::Ordering;

use crate::cards::{CardId, StatKind};
use crate::core::{MatchState, Phase, PlayerId, RoundNotice, RoundOutcome, RoundRecord};

/// Result of resolving the reveal.
#[derive(Clone, Debug)]
pub struct Resolution {
    /// State in `round_over`, hands updated, selections kept for display.
    pub state: MatchState,
    pub notice: RoundNotice,
}

/// Resolve the current round. The input must be in `reveal`.
pub fn resolve_round(state: &MatchState) -> Resolution {
    let mut next = state.clone();
    next.phase = Phase::RoundOver;

    let leader = state.initiative.unwrap_or_else(|| state.local_player());
    let outcome = compare_selections(state);

    let (message, title, description) = match &outcome {
        RoundOutcome::Won {
            winner,
            loser,
            taken,
            winning_value,
            losing_value,
        } => {
            let stat = state.stat.map_or("?", StatKind::label);
            let taken_name = card_name(state, *taken);
            transfer(&mut next, *winner, *loser, *taken);
            next.last_round_winner = Some(*winner);
            (
                format!(
                    "{} won the round with {stat} ({winning_value} vs {losing_value})! They take {taken_name} from {}.",
                    state.name_of(*winner),
                    state.name_of(*loser),
                ),
                "Round Result",
                format!(
                    "{} wins the round with {stat} ({winning_value} vs {losing_value}) and takes {taken_name}.",
                    state.name_of(*winner),
                ),
            )
        }
        RoundOutcome::Drawn { value } => {
            let stat = state.stat.map_or("?", StatKind::label);
            rotate_selected(&mut next);
            next.last_round_winner = None;
            (
                format!("It's a draw on {stat} ({value} vs {value})! Both cards go to the bottom of their hands."),
                "Round Drawn",
                format!("Both cards scored {value} on {stat}. No cards change hands."),
            )
        }
        RoundOutcome::Voided { reason } => {
            log::warn!("round {} voided: {reason}", state.round_number);
            rotate_selected(&mut next);
            next.last_round_winner = None;
            (
                format!("Round voided: {reason}. Both cards go to the bottom of their hands."),
                "Round Voided",
                format!("{reason}. The round counts as a draw."),
            )
        }
    };

    log::debug!("round {} resolved: {:?}", state.round_number, outcome);

    next.message = message;
    next.history
        .push_back(RoundRecord::new(state.round_number, leader, state.stat, outcome));

    Resolution {
        state: next,
        notice: RoundNotice {
            round: state.round_number,
            title: title.to_string(),
            description,
        },
    }
}

/// Work out who won, without touching any hands.
fn compare_selections(state: &MatchState) -> RoundOutcome {
    let Some(stat) = state.stat else {
        return RoundOutcome::Voided {
            reason: "no challenge stat was chosen".to_string(),
        };
    };
    let (first, second) = match state.selections.as_slice() {
        [first, second, ..] => (first, second),
        _ => {
            return RoundOutcome::Voided {
                reason: format!("only {} card(s) were committed", state.selections.len()),
            };
        }
    };

    let (a, b) = match (first.card.stat(stat), second.card.stat(stat)) {
        (Some(a), Some(b)) => (a, b),
        (None, _) => {
            return RoundOutcome::Voided {
                reason: format!("{} has no {} value", first.card.name, stat.label()),
            };
        }
        (_, None) => {
            return RoundOutcome::Voided {
                reason: format!("{} has no {} value", second.card.name, stat.label()),
            };
        }
    };

    match stat.rank(a, b) {
        Ordering::Equal => RoundOutcome::Drawn { value: a },
        Ordering::Greater => RoundOutcome::Won {
            winner: first.player,
            loser: second.player,
            taken: second.card.id,
            winning_value: a,
            losing_value: b,
        },
        Ordering::Less => RoundOutcome::Won {
            winner: second.player,
            loser: first.player,
            taken: first.card.id,
            winning_value: b,
            losing_value: a,
        },
    }
}

fn card_name(state: &MatchState, id: CardId) -> String {
    state
        .selections
        .iter()
        .find(|s| s.card.id == id)
        .map_or_else(|| id.to_string(), |s| s.card.name.clone())
}

/// Winner's card to the bottom of the winner's hand, then the loser's card after it.
fn transfer(state: &mut MatchState, winner: PlayerId, loser: PlayerId, taken: CardId) {
    if let Some(own) = state.selection_for(winner).map(|s| s.card.id) {
        if let Some(hand) = state.hand_mut(winner) {
            hand.rotate_to_bottom(own);
        }
    }

    let card = state.hand_mut(loser).and_then(|hand| hand.take(taken));
    match (card, state.hand_mut(winner)) {
        (Some(card), Some(hand)) => hand.push_bottom(card),
        (card, _) => log::warn!("{taken} could not move from {loser} to {winner} (held: {})", card.is_some()),
    }
}

/// Every committed card goes to the bottom of its owner's hand.
fn rotate_selected(state: &mut MatchState) {
    let committed: Vec<_> = state
        .selections
        .iter()
        .map(|s| (s.player, s.card.id))
        .collect();
    for (player, card) in committed {
        if let Some(hand) = state.hand_mut(player) {
            hand.rotate_to_bottom(card);
        }
    }
}

/// Why a match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    /// The winner holds every card in the deck.
    HoldsDeck,
    /// The loser has no cards left.
    OpponentEmpty { loser: PlayerId },
}

/// Match result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub winner: PlayerId,
    pub reason: GameOverReason,
}

/// Check whether the match is decided.
pub fn detect_game_over(state: &MatchState) -> Option<GameOver> {
    let deck_size = state.deck_size();

    if let Some(player) = state
        .players
        .values()
        .find(|p| deck_size > 0 && p.card_count() == deck_size)
    {
        return Some(GameOver {
            winner: player.id,
            reason: GameOverReason::HoldsDeck,
        });
    }

    if state.player_count() != 2 {
        return None;
    }

    state
        .players
        .values()
        .find(|p| p.card_count() == 0)
        .map(|loser| GameOver {
            winner: state.opponent_of(loser.id),
            reason: GameOverReason::OpponentEmpty { loser: loser.id },
        })
}

/// Move `state` to `game_over` with the given result.
pub fn finish_match(state: &mut MatchState, result: GameOver) {
    let winner_name = state.name_of(result.winner).to_string();
    state.message = match result.reason {
        GameOverReason::HoldsDeck => format!("{winner_name} has all the cards and wins the game!"),
        GameOverReason::OpponentEmpty { loser } => format!(
            "{} has no cards left! {winner_name} wins the game!",
            state.name_of(loser)
        ),
    };
    state.phase = Phase::GameOver;
    state.winner = Some(result.winner);
    state.turn_player = None;

    log::info!("match {} over: {} wins", state.match_id, result.winner);
}
