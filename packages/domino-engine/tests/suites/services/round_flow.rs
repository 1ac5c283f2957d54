use domino_engine::domain::{next_seat, Intent, Phase, RoundEnd, RoundTransition};
use domino_engine::{EngineConfig, EngineError, RoundFlowService, ServiceError};
use engine_test_support::seeds::fixed_seed;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::support::{opening_intent, seeded_round, simple_intent};

fn humans_only() -> RoundFlowService {
    RoundFlowService::new(EngineConfig::default(), [false; 4]).unwrap()
}

#[test]
fn opening_submit_hands_the_turn_on() {
    let service = humans_only();
    let state = seeded_round(3);
    let opener = state.opening_seat;

    let result = service.submit(&state, opening_intent(&state)).unwrap();

    assert_eq!(result.actions.len(), 1);
    assert_eq!(result.ai_actions(), 0);
    assert_eq!(result.old_version, None);
    assert_eq!(
        result.transitions,
        vec![RoundTransition::TurnBecame {
            seat: next_seat(opener)
        }]
    );
    assert_eq!(result.state.chain.len(), 1);
    // caller's value is untouched
    assert!(state.chain.is_empty());
}

#[test]
fn out_of_turn_is_an_engine_error() {
    let service = humans_only();
    let state = seeded_round(4);
    let wrong = next_seat(state.opening_seat);

    let err = service.submit(&state, Intent::Pass { seat: wrong }).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Engine(EngineError::OutOfTurn { .. })
    ));
}

#[test]
fn human_round_reports_its_end_once() {
    let service = humans_only();
    let mut state = seeded_round(5);
    let mut ended = Vec::new();
    while state.phase == Phase::Play {
        let result = service.submit(&state, simple_intent(&state)).unwrap();
        ended.extend(
            result
                .transitions
                .iter()
                .filter(|t| matches!(t, RoundTransition::RoundEnded { .. }))
                .copied(),
        );
        state = result.state;
    }
    assert_eq!(
        ended,
        vec![RoundTransition::RoundEnded {
            winner: state.winner_seat.unwrap(),
            reason: state.end_reason.unwrap(),
        }]
    );
}

#[test]
fn start_round_runs_ai_until_the_human_seat() {
    let service = RoundFlowService::new(EngineConfig::default(), [false, true, true, true]).unwrap();
    for tag in 0..12 {
        let mut rng = ChaCha20Rng::from_seed(fixed_seed(tag));
        let result = service.start_round(&mut rng).unwrap();
        let state = &result.state;

        assert!(!state.seats[0].is_ai);
        assert!(state.seats[1..].iter().all(|s| s.is_ai));
        assert_eq!(
            result.transitions.first(),
            Some(&RoundTransition::TurnBecame {
                seat: state.opening_seat
            })
        );
        match state.phase {
            Phase::Play => assert_eq!(state.current_seat, 0),
            Phase::Ended => assert!(state.winner_seat.is_some()),
            Phase::Setup => panic!("round left in setup"),
        }
        // the AI only acts while it is an AI seat's turn
        assert!(result.actions.iter().all(|a| a.seat() != 0));
    }
}

#[test]
fn all_ai_round_plays_to_the_end() {
    let config = EngineConfig {
        ai_seed: Some(7),
        ..EngineConfig::default()
    };
    let service = RoundFlowService::new(config, [true; 4]).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let result = service.start_round(&mut rng).unwrap();

    let state = &result.state;
    assert_eq!(state.phase, Phase::Ended);
    assert!(state.is_closed_world());
    let winner = state.winner_seat.unwrap();
    assert!(matches!(
        result.transitions.last(),
        Some(RoundTransition::RoundEnded { winner: w, .. }) if *w == winner
    ));
    if state.end_reason == Some(RoundEnd::Domino) {
        assert!(state.hand(winner).is_empty());
    }
    assert_eq!(result.ai_actions() + 1, result.actions.len());
}

#[test]
fn unknown_ai_name_is_a_config_error() {
    let config = EngineConfig {
        ai_name: "NoSuchAi".to_string(),
        ..EngineConfig::default()
    };
    let err = RoundFlowService::new(config, [false, true, false, false])
        .err()
        .unwrap();
    assert!(matches!(err, ServiceError::Config { .. }));

    // no AI seats means the name is never resolved
    let config = EngineConfig {
        ai_name: "NoSuchAi".to_string(),
        ..EngineConfig::default()
    };
    assert!(RoundFlowService::new(config, [false; 4]).is_ok());
}
