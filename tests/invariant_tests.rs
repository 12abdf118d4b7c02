/// Property-based tests for match invariants using proptest
///
/// Random event sequences are thrown at the reducer and the engine; whatever
/// gets accepted must keep every card accounted for and follow the phase
/// transition table, and whatever gets rejected must change nothing.
use im::Vector;
use proptest::prelude::*;
use squad_ace::cards::{Card, CardId, Hand, StatKind};
use squad_ace::core::{GameRng, MatchConfig, MatchState, Phase, Player, PlayerId};
use squad_ace::engine::{Clock, ManualClock, MatchEngine, TimerKind};
use squad_ace::rules::{initialize_match, reduce, Event};

fn stat_strategy() -> impl Strategy<Value = StatKind> {
    (0..StatKind::ALL.len()).prop_map(|i| StatKind::ALL[i])
}

fn seat_strategy() -> impl Strategy<Value = PlayerId> {
    prop::bool::ANY.prop_map(|local| if local { PlayerId::LOCAL } else { PlayerId::OPPONENT })
}

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        2 => Just(Event::StartGame),
        2 => seat_strategy().prop_map(|winner| Event::CompleteToss { winner }),
        4 => Just(Event::PlayTopCard),
        4 => stat_strategy().prop_map(Event::SelectStat),
        3 => Just(Event::AdvanceRound),
        1 => Just(Event::TogglePause),
        4 => Just(Event::OpponentMove),
        4 => Just(Event::RevealElapsed),
        2 => Just(Event::TurnTimeout),
    ]
}

/// Things a host can do to an engine.
#[derive(Clone, Debug)]
enum Op {
    Start,
    Toss,
    Play,
    Stat(StatKind),
    Advance,
    Pause,
    Wait(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        1 => Just(Op::Start),
        1 => Just(Op::Toss),
        3 => Just(Op::Play),
        3 => stat_strategy().prop_map(Op::Stat),
        1 => Just(Op::Advance),
        1 => Just(Op::Pause),
        4 => (0u64..12_000).prop_map(Op::Wait),
    ]
}

fn one_card_each(stat: StatKind, local: i64, opp: i64) -> MatchState {
    let local = Card::new(CardId::new(1), "Local").with_stat(stat, local);
    let opp = Card::new(CardId::new(2), "Opp").with_stat(stat, opp);
    let deck: Vector<Card> = vec![local.clone(), opp.clone()].into_iter().collect();
    MatchState::new(
        "duel",
        vec![
            Player::new(PlayerId::LOCAL, "You", true, Hand::new([local])),
            Player::new(PlayerId::OPPONENT, "Opponent", false, Hand::new([opp])),
        ],
        deck,
    )
}

proptest! {
    #[test]
    fn test_reducer_keeps_cards_and_follows_table(
        seed in any::<u64>(),
        events in prop::collection::vec(event_strategy(), 0..300),
    ) {
        let mut rng = GameRng::new(seed);
        let mut state = initialize_match("prop", &MatchConfig::default(), &mut rng);

        for event in events {
            if let Ok(t) = reduce(&state, &event, &mut rng) {
                let next = t.state;
                prop_assert!(
                    next.phase == state.phase || state.phase.can_become(next.phase),
                    "{} -> {} via {}", state.phase, next.phase, event
                );
                prop_assert_eq!(next.total_cards(), next.deck_size());
                prop_assert!(next.selections.len() <= 2);
                prop_assert_eq!(next.phase == Phase::GameOver, next.winner.is_some());
                if next.phase.awaits_local_user() {
                    prop_assert_eq!(next.turn_player, Some(PlayerId::LOCAL));
                }
                state = next;
            }
        }
    }

    #[test]
    fn test_engine_rejections_change_nothing(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 0..200),
    ) {
        let clock = ManualClock::new();
        let config = MatchConfig::default().with_seed(seed);
        let mut engine = MatchEngine::with_clock(config, "prop", clock.clone()).unwrap();

        for op in ops {
            let before = engine.state().clone();
            let deadline = engine.next_deadline();

            let result = match op {
                Op::Start => engine.start_game(),
                Op::Toss => engine.toss().map(|_| ()),
                Op::Play => engine.play_top_card(),
                Op::Stat(stat) => engine.select_stat(stat),
                Op::Advance => engine.advance_to_next_round(),
                Op::Pause => engine.toggle_pause(),
                Op::Wait(ms) => {
                    clock.advance(ms);
                    engine.tick();
                    Ok(())
                }
            };

            if result.is_err() {
                prop_assert_eq!(engine.state(), &before);
                prop_assert_eq!(engine.next_deadline(), deadline);
            }

            let state = engine.state();
            prop_assert_eq!(state.total_cards(), state.deck_size());
            if state.paused {
                prop_assert_eq!(engine.next_deadline(), None);
            }
            if state.is_over() {
                prop_assert!(engine.timers().is_empty());
            }
            let pending = TimerKind::ALL
                .into_iter()
                .filter(|&k| engine.timers().is_pending(k))
                .count();
            prop_assert!(pending <= 1);
        }
    }

    #[test]
    fn test_pause_freezes_countdown(elapsed in 0u64..10_000, paused_for in 0u64..1_000_000) {
        let clock = ManualClock::new();
        let config = MatchConfig::default().with_seed(11);
        let mut engine = MatchEngine::with_clock(config, "pause", clock.clone()).unwrap();
        engine.start_game().unwrap();
        engine.complete_toss(PlayerId::LOCAL).unwrap();

        clock.advance(elapsed);
        engine.tick();
        let countdown = engine.countdown();

        engine.toggle_pause().unwrap();
        clock.advance(paused_for);
        prop_assert_eq!(engine.tick(), 0);
        prop_assert_eq!(engine.countdown(), countdown);

        engine.toggle_pause().unwrap();
        prop_assert_eq!(engine.countdown(), countdown);
        prop_assert_eq!(
            engine.timers().remaining(TimerKind::TurnTimeout, clock.now_ms()),
            Some(10_000 - elapsed)
        );
        prop_assert_eq!(engine.state().phase, Phase::PlayerTurnSelectCard);
    }

    #[test]
    fn test_resolution_follows_stat_direction(
        stat in stat_strategy(),
        local in 0i64..2_000,
        opp in 0i64..2_000,
    ) {
        let mut rng = GameRng::new(0);
        let mut state = one_card_each(stat, local, opp);
        for event in [
            Event::StartGame,
            Event::CompleteToss { winner: PlayerId::LOCAL },
            Event::PlayTopCard,
            Event::SelectStat(stat),
            Event::OpponentMove,
            Event::RevealElapsed,
        ] {
            state = reduce(&state, &event, &mut rng).unwrap().state;
        }

        let expected = if local == opp {
            None
        } else if (local > opp) == stat.higher_is_better() {
            Some(PlayerId::LOCAL)
        } else {
            Some(PlayerId::OPPONENT)
        };
        prop_assert_eq!(state.last_round_winner, expected);
        prop_assert_eq!(state.total_cards(), 2);
        match expected {
            Some(winner) => prop_assert_eq!(state.hand(winner).map(Hand::len), Some(2)),
            None => {
                prop_assert_eq!(state.hand(PlayerId::LOCAL).map(Hand::len), Some(1));
                prop_assert_eq!(state.hand(PlayerId::OPPONENT).map(Hand::len), Some(1));
            }
        }
    }
}

#[test]
fn test_every_phase_has_declared_predecessor() {
    for phase in Phase::ALL {
        if phase == Phase::Lobby {
            continue;
        }
        assert!(
            Phase::ALL.iter().any(|p| p.can_become(phase)),
            "{phase} is unreachable"
        );
    }
    assert!(Phase::GameOver.successors().is_empty());
}
