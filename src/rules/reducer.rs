//! The turn engine as a pure reducer.
//!
//! `reduce` takes the current state and one event and either returns the
//! next state or a `Rejection`. It never mutates its input, so a rejected
//! event leaves the match exactly as it was. Scheduling is not its concern:
//! the engine driver decides when the scheduled events (`OpponentMove`,
//! `RevealElapsed`, `TurnTimeout` and a timed `AdvanceRound`) are fed in.
//!
//! ## Example
//!
//! ```
//! use squad_ace::core::{GameRng, MatchConfig, Phase};
//! use squad_ace::rules::{initialize_match, reduce, Event};
//!
//! let mut rng = GameRng::new(7);
//! let state = initialize_match("alpha", &MatchConfig::default(), &mut rng);
//!
//! let next = reduce(&state, &Event::StartGame, &mut rng).unwrap().state;
//! assert_eq!(next.phase, Phase::Toss);
//!
//! // Out of phase: refused, nothing changes.
//! assert!(reduce(&state, &Event::PlayTopCard, &mut rng).is_err());
//! ```

use serde::{Deserialize, Serialize};

use super::opponent::choose_stat;
use super::resolution::{detect_game_over, finish_match, resolve_round};
use crate::cards::StatKind;
use crate::core::{GameRng, MatchState, Phase, PlayerId, Rejection, RoundNotice, Selection};

/// Something that can happen to a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    /// Lobby to toss.
    StartGame,
    /// The toss was decided.
    CompleteToss { winner: PlayerId },
    /// Local user commits their top card.
    PlayTopCard,
    /// Local user picks the challenge stat.
    SelectStat(StatKind),
    /// Round over to the next round (or game over).
    AdvanceRound,
    TogglePause,
    /// The opponent's thinking delay elapsed.
    OpponentMove,
    /// The reveal delay elapsed.
    RevealElapsed,
    /// The local user's countdown ran out.
    TurnTimeout,
}

impl Event {
    /// Short action name used in rejections and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Event::StartGame => "start_game",
            Event::CompleteToss { .. } => "complete_toss",
            Event::PlayTopCard => "play_top_card",
            Event::SelectStat(_) => "select_stat",
            Event::AdvanceRound => "advance_round",
            Event::TogglePause => "toggle_pause",
            Event::OpponentMove => "opponent_move",
            Event::RevealElapsed => "reveal_elapsed",
            Event::TurnTimeout => "turn_timeout",
        }
    }

    /// Check whether only a timer produces this event.
    #[must_use]
    pub const fn is_scheduled(&self) -> bool {
        matches!(
            self,
            Event::OpponentMove | Event::RevealElapsed | Event::TurnTimeout
        )
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepted event: the next state and, after a resolved round, its notice.
#[derive(Clone, Debug)]
pub struct Transition {
    pub state: MatchState,
    pub notice: Option<RoundNotice>,
}

impl Transition {
    fn quiet(state: MatchState) -> Self {
        Self {
            state,
            notice: None,
        }
    }
}

/// Apply `event` to `state`.
///
/// Randomness (the opponent's stat pick, the timeout stat pick) is drawn
/// from `rng`; nothing is drawn when the event is rejected.
pub fn reduce(
    state: &MatchState,
    event: &Event,
    rng: &mut GameRng,
) -> Result<Transition, Rejection> {
    let result = apply(state, event, rng);

    match &result {
        Ok(t) => {
            debug_assert!(
                t.state.phase == state.phase || state.phase.can_become(t.state.phase),
                "{} -> {} is not in the transition table",
                state.phase,
                t.state.phase
            );
            log::debug!("{event}: {} -> {}", state.phase, t.state.phase);
        }
        Err(rejection) if event.is_scheduled() => {
            log::debug!("stale {event} dropped: {rejection}");
        }
        Err(rejection) => log::debug!("{event} rejected: {rejection}"),
    }

    result
}

fn apply(state: &MatchState, event: &Event, rng: &mut GameRng) -> Result<Transition, Rejection> {
    if state.is_over() {
        return Err(Rejection::GameOver);
    }
    if state.paused && *event != Event::TogglePause {
        return Err(Rejection::Paused {
            action: event.name(),
        });
    }

    match *event {
        Event::StartGame => start_game(state),
        Event::CompleteToss { winner } => complete_toss(state, winner),
        Event::PlayTopCard => {
            expect_local_turn(state, event, |p| {
                matches!(
                    p,
                    Phase::PlayerTurnSelectCard | Phase::PlayerTurnRespondToOpponentChallenge
                )
            })?;
            play_local_top_card(state)
        }
        Event::SelectStat(stat) => {
            expect_local_turn(state, event, |p| p == Phase::PlayerTurnSelectStat)?;
            Ok(Transition::quiet(commit_stat(state, stat)))
        }
        Event::AdvanceRound => {
            expect_phase(state, event, Phase::RoundOver)?;
            Ok(Transition::quiet(advance_round(state)))
        }
        Event::TogglePause => {
            let mut next = state.clone();
            next.paused = !state.paused;
            Ok(Transition::quiet(next))
        }
        Event::OpponentMove => opponent_move(state, event, rng),
        Event::RevealElapsed => {
            expect_phase(state, event, Phase::Reveal)?;
            let resolution = resolve_round(state);
            Ok(Transition {
                state: resolution.state,
                notice: Some(resolution.notice),
            })
        }
        Event::TurnTimeout => {
            expect_local_turn(state, event, Phase::awaits_local_user)?;
            log::info!("turn timed out in {}; playing for {}", state.phase, state.local_player());
            if state.phase == Phase::PlayerTurnSelectStat {
                let stat = timeout_stat(state, rng);
                Ok(Transition::quiet(commit_stat(state, stat)))
            } else {
                play_local_top_card(state)
            }
        }
    }
}

fn expect_phase(state: &MatchState, event: &Event, phase: Phase) -> Result<(), Rejection> {
    if state.phase == phase {
        Ok(())
    } else {
        Err(Rejection::WrongPhase {
            action: event.name(),
            phase: state.phase,
        })
    }
}

fn expect_local_turn(
    state: &MatchState,
    event: &Event,
    phase_ok: impl Fn(Phase) -> bool,
) -> Result<(), Rejection> {
    if !phase_ok(state.phase) {
        return Err(Rejection::WrongPhase {
            action: event.name(),
            phase: state.phase,
        });
    }
    if !state.is_local_turn() {
        return Err(Rejection::OutOfTurn {
            action: event.name(),
        });
    }
    Ok(())
}

fn start_game(state: &MatchState) -> Result<Transition, Rejection> {
    expect_phase(state, &Event::StartGame, Phase::Lobby)?;

    let mut next = state.clone();
    next.phase = Phase::Toss;
    next.message = "Let's toss to see who starts!".to_string();
    log::info!("match {} started", state.match_id);
    Ok(Transition::quiet(next))
}

fn complete_toss(state: &MatchState, winner: PlayerId) -> Result<Transition, Rejection> {
    expect_phase(state, &Event::CompleteToss { winner }, Phase::Toss)?;
    if state.player(winner).is_none() {
        return Err(Rejection::UnknownPlayer(winner));
    }

    let mut next = state.clone();
    start_round(&mut next, winner);
    next.message = if next.is_local(winner) {
        format!("{} won the toss! Play your top card to start.", next.name_of(winner))
    } else {
        format!("{} won the toss and is choosing a card...", next.name_of(winner))
    };
    log::info!("{winner} won the toss");
    Ok(Transition::quiet(next))
}

/// Open a round led by `leader`.
fn start_round(state: &mut MatchState, leader: PlayerId) {
    state.round_number += 1;
    state.selections.clear();
    state.stat = None;
    state.initiative = Some(leader);
    state.turn_player = Some(leader);
    state.phase = if state.is_local(leader) {
        Phase::PlayerTurnSelectCard
    } else {
        Phase::OpponentTurnSelectCardAndStat
    };
}

/// Commit the local user's top card in either card phase.
fn play_local_top_card(state: &MatchState) -> Result<Transition, Rejection> {
    let local = state.local_player();
    let Some(card) = state.hand(local).and_then(|h| h.top()).cloned() else {
        return out_of_cards(state, local);
    };

    let mut next = state.clone();
    if state.phase == Phase::PlayerTurnRespondToOpponentChallenge {
        let stat = state.stat.ok_or(Rejection::NoChallengeStat)?;
        next.message = format!("Comparing {}! Your {} is revealed.", stat.label(), card.name);
        next.selections.push(Selection::new(local, card));
        next.phase = Phase::Reveal;
    } else {
        next.message = format!(
            "You played {}. Now pick a stat to challenge with.",
            card.name
        );
        next.selections.push(Selection::new(local, card));
        next.phase = Phase::PlayerTurnSelectStat;
    }
    Ok(Transition::quiet(next))
}

/// Fix the challenge stat and hand the turn to the opponent.
fn commit_stat(state: &MatchState, stat: StatKind) -> MatchState {
    let opponent = state.opponent_player();

    let mut next = state.clone();
    next.stat = Some(stat);
    next.phase = Phase::OpponentTurnSelectingCard;
    next.turn_player = Some(opponent);
    next.message = format!(
        "You chose {}. {} is selecting their card...",
        stat.label(),
        state.name_of(opponent)
    );
    next
}

/// Stat picked for the local user when their countdown expires.
fn timeout_stat(state: &MatchState, rng: &mut GameRng) -> StatKind {
    let local = state.local_player();
    let card = state
        .selection_for(local)
        .map(|s| &s.card)
        .or_else(|| state.hand(local).and_then(|h| h.top()));

    match card {
        Some(card) => choose_stat(card, rng),
        None => rng.choose(&StatKind::ALL).copied().unwrap_or(StatKind::Runs),
    }
}

fn opponent_move(
    state: &MatchState,
    event: &Event,
    rng: &mut GameRng,
) -> Result<Transition, Rejection> {
    if !state.phase.awaits_opponent() {
        return Err(Rejection::WrongPhase {
            action: event.name(),
            phase: state.phase,
        });
    }

    let opponent = state.opponent_player();
    let Some(card) = state.hand(opponent).and_then(|h| h.top()).cloned() else {
        return out_of_cards(state, opponent);
    };
    let name = state.name_of(opponent).to_string();

    let mut next = state.clone();
    if state.phase == Phase::OpponentTurnSelectCardAndStat {
        let stat = choose_stat(&card, rng);
        next.stat = Some(stat);
        next.selections.push(Selection::new(opponent, card));
        next.phase = Phase::PlayerTurnRespondToOpponentChallenge;
        next.turn_player = Some(state.local_player());
        next.message = format!(
            "{name} challenges with {}! Play your top card to respond.",
            stat.label()
        );
    } else {
        let stat = state.stat.ok_or(Rejection::NoChallengeStat)?;
        next.message = format!("{name} plays {}. Comparing {}!", card.name, stat.label());
        next.selections.push(Selection::new(opponent, card));
        next.phase = Phase::Reveal;
    }
    Ok(Transition::quiet(next))
}

/// Leave `round_over`: end the match if it is decided, otherwise open the
/// next round for the last round's winner (or the same leader after a draw).
fn advance_round(state: &MatchState) -> MatchState {
    let mut next = state.clone();

    if let Some(result) = detect_game_over(state) {
        finish_match(&mut next, result);
        return next;
    }

    let leader = state
        .last_round_winner
        .or(state.initiative)
        .unwrap_or_else(|| state.local_player());
    start_round(&mut next, leader);
    next.message = format!("It's {}'s turn.", next.name_of(leader));
    next
}

/// A player with no cards was asked to act.
fn out_of_cards(state: &MatchState, player: PlayerId) -> Result<Transition, Rejection> {
    match detect_game_over(state) {
        Some(result) => {
            let mut next = state.clone();
            finish_match(&mut next, result);
            Ok(Transition::quiet(next))
        }
        None => Err(Rejection::EmptyHand { player }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, Hand};
    use crate::core::{MatchConfig, Player};
    use crate::rules::initialize_match;
    use im::Vector;

    fn lobby() -> (MatchState, GameRng) {
        let mut rng = GameRng::new(42);
        let state = initialize_match("test", &MatchConfig::default(), &mut rng);
        (state, rng)
    }

    fn step(state: &MatchState, event: Event, rng: &mut GameRng) -> MatchState {
        reduce(state, &event, rng).unwrap().state
    }

    fn after_toss(winner: PlayerId) -> (MatchState, GameRng) {
        let (state, mut rng) = lobby();
        let state = step(&state, Event::StartGame, &mut rng);
        let state = step(&state, Event::CompleteToss { winner }, &mut rng);
        (state, rng)
    }

    /// Handcrafted match: each side holds the given runs values, top first.
    fn runs_match(local: &[i64], opp: &[i64]) -> MatchState {
        let mk = |base: u32, values: &[i64]| -> Vec<Card> {
            values
                .iter()
                .enumerate()
                .map(|(i, &v)| {
                    Card::new(CardId::new(base + i as u32), format!("C{}", base + i as u32))
                        .with_stat(StatKind::Runs, v)
                })
                .collect()
        };
        let local_cards = mk(1, local);
        let opp_cards = mk(100, opp);
        let deck: Vector<Card> = local_cards.iter().chain(&opp_cards).cloned().collect();
        MatchState::new(
            "hand",
            vec![
                Player::new(PlayerId::LOCAL, "You", true, Hand::new(local_cards)),
                Player::new(PlayerId::OPPONENT, "Opponent", false, Hand::new(opp_cards)),
            ],
            deck,
        )
    }

    #[test]
    fn test_start_game() {
        let (state, mut rng) = lobby();
        let next = step(&state, Event::StartGame, &mut rng);

        assert_eq!(next.phase, Phase::Toss);
        assert_eq!(next.message, "Let's toss to see who starts!");
    }

    #[test]
    fn test_start_game_twice_rejected() {
        let (state, mut rng) = lobby();
        let toss = step(&state, Event::StartGame, &mut rng);

        assert_eq!(
            reduce(&toss, &Event::StartGame, &mut rng).unwrap_err(),
            Rejection::WrongPhase {
                action: "start_game",
                phase: Phase::Toss
            }
        );
    }

    #[test]
    fn test_toss_local_winner() {
        let (state, _) = after_toss(PlayerId::LOCAL);

        assert_eq!(state.phase, Phase::PlayerTurnSelectCard);
        assert_eq!(state.initiative, Some(PlayerId::LOCAL));
        assert_eq!(state.turn_player, Some(PlayerId::LOCAL));
        assert_eq!(state.round_number, 1);
    }

    #[test]
    fn test_toss_opponent_winner() {
        let (state, _) = after_toss(PlayerId::OPPONENT);

        assert_eq!(state.phase, Phase::OpponentTurnSelectCardAndStat);
        assert_eq!(state.turn_player, Some(PlayerId::OPPONENT));
    }

    #[test]
    fn test_toss_unknown_player() {
        let (state, mut rng) = lobby();
        let toss = step(&state, Event::StartGame, &mut rng);

        let err = reduce(&toss, &Event::CompleteToss { winner: PlayerId::new(7) }, &mut rng);
        assert_eq!(err.unwrap_err(), Rejection::UnknownPlayer(PlayerId::new(7)));
    }

    #[test]
    fn test_local_led_round() {
        let (state, mut rng) = after_toss(PlayerId::LOCAL);
        let top = state.hand(PlayerId::LOCAL).and_then(Hand::top).cloned().unwrap();

        let s = step(&state, Event::PlayTopCard, &mut rng);
        assert_eq!(s.phase, Phase::PlayerTurnSelectStat);
        assert_eq!(s.selections.len(), 1);
        assert_eq!(s.selections[0].card, top);
        // Committed cards stay in the hand until resolution.
        assert_eq!(s.total_cards(), s.deck_size());

        let s = step(&s, Event::SelectStat(StatKind::Runs), &mut rng);
        assert_eq!(s.phase, Phase::OpponentTurnSelectingCard);
        assert_eq!(s.stat, Some(StatKind::Runs));
        assert_eq!(s.turn_player, Some(PlayerId::OPPONENT));

        let s = step(&s, Event::OpponentMove, &mut rng);
        assert_eq!(s.phase, Phase::Reveal);
        assert_eq!(s.selections.len(), 2);

        let t = reduce(&s, &Event::RevealElapsed, &mut rng).unwrap();
        assert_eq!(t.state.phase, Phase::RoundOver);
        assert!(t.notice.is_some());
        assert_eq!(t.state.total_cards(), t.state.deck_size());
    }

    #[test]
    fn test_opponent_led_round() {
        let (state, mut rng) = after_toss(PlayerId::OPPONENT);

        let s = step(&state, Event::OpponentMove, &mut rng);
        assert_eq!(s.phase, Phase::PlayerTurnRespondToOpponentChallenge);
        assert!(s.stat.is_some());
        assert_eq!(s.turn_player, Some(PlayerId::LOCAL));
        assert!(s.message.contains("challenges with"));

        // The challenger fixed the stat; the user cannot pick one.
        assert!(reduce(&s, &Event::SelectStat(StatKind::Wickets), &mut rng).is_err());

        let s = step(&s, Event::PlayTopCard, &mut rng);
        assert_eq!(s.phase, Phase::Reveal);
        assert_eq!(s.selections.len(), 2);
    }

    #[test]
    fn test_user_actions_rejected_on_opponent_turn() {
        let (state, mut rng) = after_toss(PlayerId::OPPONENT);

        let before = state.clone();
        assert!(reduce(&state, &Event::PlayTopCard, &mut rng).is_err());
        assert!(reduce(&state, &Event::SelectStat(StatKind::Runs), &mut rng).is_err());
        assert!(reduce(&state, &Event::TurnTimeout, &mut rng).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_turn_in_local_phase() {
        let (mut state, mut rng) = after_toss(PlayerId::LOCAL);
        state.turn_player = Some(PlayerId::OPPONENT);

        assert_eq!(
            reduce(&state, &Event::PlayTopCard, &mut rng).unwrap_err(),
            Rejection::OutOfTurn {
                action: "play_top_card"
            }
        );
    }

    #[test]
    fn test_stale_opponent_move_rejected() {
        let (state, mut rng) = after_toss(PlayerId::LOCAL);
        assert!(matches!(
            reduce(&state, &Event::OpponentMove, &mut rng),
            Err(Rejection::WrongPhase { .. })
        ));
    }

    #[test]
    fn test_round_winner_leads_next_round() {
        let mut state = runs_match(&[500, 10], &[300, 10]);
        let mut rng = GameRng::new(1);
        state = step(&state, Event::StartGame, &mut rng);
        state = step(&state, Event::CompleteToss { winner: PlayerId::OPPONENT }, &mut rng);
        state = step(&state, Event::OpponentMove, &mut rng);
        // Force runs so the outcome is fixed.
        state.stat = Some(StatKind::Runs);
        state = step(&state, Event::PlayTopCard, &mut rng);
        state = step(&state, Event::RevealElapsed, &mut rng);

        assert_eq!(state.last_round_winner, Some(PlayerId::LOCAL));
        assert_eq!(state.hand(PlayerId::LOCAL).unwrap().len(), 3);
        assert_eq!(state.hand(PlayerId::OPPONENT).unwrap().len(), 1);

        let next = step(&state, Event::AdvanceRound, &mut rng);
        assert_eq!(next.phase, Phase::PlayerTurnSelectCard);
        assert_eq!(next.initiative, Some(PlayerId::LOCAL));
        assert_eq!(next.round_number, 2);
        assert!(next.selections.is_empty());
        assert_eq!(next.stat, None);
        assert_eq!(next.message, "It's You's turn.");
    }

    #[test]
    fn test_draw_keeps_initiative() {
        let mut state = runs_match(&[400, 1], &[400, 1]);
        let mut rng = GameRng::new(1);
        state = step(&state, Event::StartGame, &mut rng);
        state = step(&state, Event::CompleteToss { winner: PlayerId::LOCAL }, &mut rng);
        state = step(&state, Event::PlayTopCard, &mut rng);
        state = step(&state, Event::SelectStat(StatKind::Runs), &mut rng);
        state = step(&state, Event::OpponentMove, &mut rng);
        state = step(&state, Event::RevealElapsed, &mut rng);

        assert_eq!(state.last_round_winner, None);
        let next = step(&state, Event::AdvanceRound, &mut rng);
        assert_eq!(next.initiative, Some(PlayerId::LOCAL));
        assert_eq!(next.phase, Phase::PlayerTurnSelectCard);
    }

    #[test]
    fn test_advance_into_game_over() {
        let mut state = runs_match(&[900], &[100]);
        let mut rng = GameRng::new(1);
        state = step(&state, Event::StartGame, &mut rng);
        state = step(&state, Event::CompleteToss { winner: PlayerId::LOCAL }, &mut rng);
        state = step(&state, Event::PlayTopCard, &mut rng);
        state = step(&state, Event::SelectStat(StatKind::Runs), &mut rng);
        state = step(&state, Event::OpponentMove, &mut rng);
        state = step(&state, Event::RevealElapsed, &mut rng);
        state = step(&state, Event::AdvanceRound, &mut rng);

        assert_eq!(state.phase, Phase::GameOver);
        assert_eq!(state.winner, Some(PlayerId::LOCAL));
        assert_eq!(state.turn_player, None);
        assert_eq!(state.message, "You has all the cards and wins the game!");

        for event in [Event::StartGame, Event::TogglePause, Event::AdvanceRound] {
            assert_eq!(reduce(&state, &event, &mut rng).unwrap_err(), Rejection::GameOver);
        }
    }

    #[test]
    fn test_pause_blocks_everything_but_unpause() {
        let (state, mut rng) = after_toss(PlayerId::LOCAL);
        let paused = step(&state, Event::TogglePause, &mut rng);
        assert!(paused.paused);

        for event in [
            Event::PlayTopCard,
            Event::TurnTimeout,
            Event::OpponentMove,
            Event::AdvanceRound,
        ] {
            assert!(matches!(
                reduce(&paused, &event, &mut rng),
                Err(Rejection::Paused { .. })
            ));
        }

        let resumed = step(&paused, Event::TogglePause, &mut rng);
        assert!(!resumed.paused);
        assert_eq!(resumed.phase, Phase::PlayerTurnSelectCard);
    }

    #[test]
    fn test_timeout_plays_top_card() {
        let (state, mut rng) = after_toss(PlayerId::LOCAL);
        let next = step(&state, Event::TurnTimeout, &mut rng);

        assert_eq!(next.phase, Phase::PlayerTurnSelectStat);
        assert_eq!(next.selections.len(), 1);
    }

    #[test]
    fn test_timeout_picks_stat() {
        let (state, mut rng) = after_toss(PlayerId::LOCAL);
        let state = step(&state, Event::PlayTopCard, &mut rng);
        let next = step(&state, Event::TurnTimeout, &mut rng);

        assert_eq!(next.phase, Phase::OpponentTurnSelectingCard);
        assert!(next.stat.is_some());
    }

    #[test]
    fn test_timeout_responds_to_challenge() {
        let (state, mut rng) = after_toss(PlayerId::OPPONENT);
        let state = step(&state, Event::OpponentMove, &mut rng);
        let next = step(&state, Event::TurnTimeout, &mut rng);

        assert_eq!(next.phase, Phase::Reveal);
    }

    #[test]
    fn test_empty_hand_redirects_to_game_over() {
        let mut state = runs_match(&[], &[5, 6]);
        state.phase = Phase::PlayerTurnSelectCard;
        state.turn_player = Some(PlayerId::LOCAL);
        state.initiative = Some(PlayerId::LOCAL);
        let mut rng = GameRng::new(1);

        let next = step(&state, Event::TurnTimeout, &mut rng);
        assert_eq!(next.phase, Phase::GameOver);
        assert_eq!(next.winner, Some(PlayerId::OPPONENT));
    }

    #[test]
    fn test_opponent_empty_hand_redirects_to_game_over() {
        let mut state = runs_match(&[5, 6], &[]);
        state.phase = Phase::OpponentTurnSelectCardAndStat;
        state.turn_player = Some(PlayerId::OPPONENT);
        let mut rng = GameRng::new(1);

        let next = step(&state, Event::OpponentMove, &mut rng);
        assert_eq!(next.phase, Phase::GameOver);
        assert_eq!(next.winner, Some(PlayerId::LOCAL));
    }

    #[test]
    fn test_event_names() {
        assert_eq!(Event::SelectStat(StatKind::Runs).name(), "select_stat");
        assert!(Event::TurnTimeout.is_scheduled());
        assert!(!Event::AdvanceRound.is_scheduled());
        assert_eq!(Event::CompleteToss { winner: PlayerId::LOCAL }.to_string(), "complete_toss");
    }
}
