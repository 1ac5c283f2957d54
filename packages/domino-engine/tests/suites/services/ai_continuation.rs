use domino_engine::ai::{AiError, AiPlayer};
use domino_engine::domain::rules::PLAYERS;
use domino_engine::domain::{
    next_seat, End, OrientedTile, Phase, Placement, RoundAction, RoundState, Seat, SeatView,
    DOUBLE_SIX,
};
use domino_engine::{EngineConfig, RoundFlowService, ServiceError};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::support::scripted_ai::ScriptedAi;
use crate::support::{opening_intent, seeded_round};

/// Seat `human` is driven by the test; every other seat gets the player
/// `make` returns for it.
fn service_with(
    human: Seat,
    mut make: impl FnMut(Seat) -> Option<Box<dyn AiPlayer>>,
) -> RoundFlowService {
    let players: [Option<Box<dyn AiPlayer>>; PLAYERS] = std::array::from_fn(|i| {
        let seat = i as Seat;
        if seat == human {
            None
        } else {
            make(seat)
        }
    });
    RoundFlowService::with_players(EngineConfig::default(), players)
}

fn mark_ai(mut state: RoundState, human: Seat) -> RoundState {
    for (i, seat) in state.seats.iter_mut().enumerate() {
        seat.is_ai = i as Seat != human;
    }
    state
}

#[test]
fn continuation_stops_at_the_human_seat() {
    let state = seeded_round(6);
    let human = state.opening_seat;
    let service = service_with(human, |_| Some(Box::new(ScriptedAi::new(vec![]))));
    let state = mark_ai(state, human);

    let result = service.submit(&state, opening_intent(&state)).unwrap();
    assert_eq!(result.state.phase, Phase::Play);
    assert_eq!(result.state.current_seat, human);
    assert_eq!(result.ai_actions(), 3);
    let seats: Vec<Seat> = result.actions.iter().map(|a| a.seat()).collect();
    assert_eq!(
        seats,
        vec![
            human,
            next_seat(human),
            next_seat(next_seat(human)),
            next_seat(next_seat(next_seat(human)))
        ]
    );
}

#[test]
fn ai_failure_discards_the_whole_mutation() {
    let state = seeded_round(7);
    let human = state.opening_seat;
    let failing = next_seat(next_seat(human));
    let service = service_with(human, |seat| -> Option<Box<dyn AiPlayer>> {
        if seat == failing {
            Some(Box::new(ScriptedAi::failing("model offline")))
        } else {
            Some(Box::new(ScriptedAi::new(vec![])))
        }
    });
    let state = mark_ai(state, human);
    let before = state.clone();

    let err = service.submit(&state, opening_intent(&state)).unwrap_err();
    match err {
        ServiceError::Ai { seat, source } => {
            assert_eq!(seat, failing);
            assert_eq!(source, AiError::Internal("model offline".to_string()));
        }
        other => panic!("expected AI error, got {other:?}"),
    }
    assert_eq!(state, before);
}

#[test]
fn illegal_ai_choice_is_reported_not_applied() {
    let state = seeded_round(8);
    let human = state.opening_seat;
    let service = service_with(human, |_| {
        Some(Box::new(ScriptedAi::new(vec![Ok(Some(Placement::new(
            99,
            End::Left,
        )))])))
    });
    let state = mark_ai(state, human);

    let err = service.submit(&state, opening_intent(&state)).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Ai {
            source: AiError::InvalidMove(_),
            ..
        }
    ));
}

#[test]
fn ai_flag_without_a_player_is_a_config_error() {
    let state = seeded_round(9);
    let human = state.opening_seat;
    let service = service_with(human, |_| None);
    let state = mark_ai(state, human);

    let err = service.submit(&state, opening_intent(&state)).unwrap_err();
    assert!(matches!(err, ServiceError::Config { .. }));
}

/// Opens at the right end, otherwise plays its first legal move.
struct OpensRight;

impl AiPlayer for OpensRight {
    fn choose_move(&self, view: &SeatView) -> Result<Option<Placement>, AiError> {
        if view.chain_empty() {
            return Ok(view
                .hand
                .iter()
                .position(|t| *t == DOUBLE_SIX)
                .map(|i| Placement::new(i, End::Right)));
        }
        Ok(view.legal_moves().first().copied())
    }
}

#[test]
fn opening_at_the_right_end_is_accepted() {
    let players: [Option<Box<dyn AiPlayer>>; PLAYERS] =
        std::array::from_fn(|_| Some(Box::new(OpensRight) as Box<dyn AiPlayer>));
    let service = RoundFlowService::with_players(EngineConfig::default(), players);

    let result = service
        .start_round(&mut ChaCha20Rng::from_seed([3; 32]))
        .unwrap();

    assert_eq!(result.state.phase, Phase::Ended);
    assert!(matches!(
        result.actions.first(),
        Some(RoundAction::Played {
            end: End::Right,
            placed,
            ..
        }) if *placed == OrientedTile::new(6, 6)
    ));
}
