use domino_engine::domain::round::PassPolicy;
use domino_engine::domain::{End, OrientedTile, Phase, RoundEnd, RoundState, Tile, DOUBLE_SIX};
use domino_engine::engine::apply_pass_with;
use domino_engine::{apply_move, apply_pass, EngineConfig, EngineError, IllegalMoveKind};

use crate::support::{index_of, seeded_round, tiles};

fn hand_state(hands: [Vec<Tile>; 4], chain: Vec<OrientedTile>) -> RoundState {
    let mut state = RoundState::from_hands(hands);
    state.phase = Phase::Play;
    state.chain = chain;
    state
}

#[test]
fn opening_with_anything_but_double_six_fails() {
    let state = hand_state([tiles(&[(6, 6), (1, 2)]), vec![], vec![], vec![]], vec![]);

    let err = apply_move(&state, 0, 1, End::Left).unwrap_err();
    assert!(matches!(
        err,
        EngineError::IllegalMove {
            kind: IllegalMoveKind::OpeningRequiresDoubleSix,
            ..
        }
    ));

    let next = apply_move(&state, 0, 0, End::Left).unwrap();
    assert_eq!(next.chain, vec![OrientedTile::new(6, 6)]);
}

#[test]
fn placing_three_five_on_a_five_exposes_three() {
    let state = hand_state(
        [tiles(&[(3, 5), (1, 1)]), vec![], vec![], vec![]],
        vec![OrientedTile::new(5, 6), OrientedTile::new(6, 6)],
    );
    let next = apply_move(&state, 0, 0, End::Left).unwrap();
    assert_eq!(next.left_end(), Some(3));
    assert_eq!(next.chain[0].tile(), Tile::new(3, 5));
    assert_eq!(next.chain[0].right, 5);
}

#[test]
fn blocked_round_picks_lowest_pip_seat() {
    // pip totals [12, 8, 8, 20]
    let mut state = hand_state(
        [
            tiles(&[(6, 6)]),
            tiles(&[(3, 5)]),
            tiles(&[(2, 6)]),
            tiles(&[(5, 5), (4, 6)]),
        ],
        vec![OrientedTile::new(0, 0)],
    );
    for seat in 0..4 {
        state = apply_pass(&state, seat).unwrap();
    }
    assert_eq!(state.phase, Phase::Ended);
    assert_eq!(state.winner_seat, Some(1));
    assert_eq!(state.end_reason, Some(RoundEnd::Blocked));
}

#[test]
fn domino_out_wins_regardless_of_other_hands() {
    let state = hand_state(
        [
            tiles(&[(0, 0), (1, 1)]),
            tiles(&[(6, 3)]),
            tiles(&[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6)]),
            tiles(&[(1, 2)]),
        ],
        vec![OrientedTile::new(6, 6)],
    );
    let mut state = apply_pass(&state, 0).unwrap();
    state = apply_move(&state, 1, 0, End::Right).unwrap();
    assert_eq!(state.phase, Phase::Ended);
    assert_eq!(state.winner_seat, Some(1));
    assert_eq!(state.end_reason, Some(RoundEnd::Domino));
}

#[test]
fn rejected_operations_return_errors_only() {
    let state = seeded_round(11);
    let opener = state.opening_seat;
    let wrong = (opener + 2) % 4;

    assert!(matches!(
        apply_move(&state, wrong, 0, End::Left),
        Err(EngineError::OutOfTurn { .. })
    ));
    assert!(matches!(
        apply_pass(&state, wrong),
        Err(EngineError::OutOfTurn { .. })
    ));
    assert!(matches!(
        apply_move(&state, opener, 99, End::Left),
        Err(EngineError::IllegalMove {
            kind: IllegalMoveKind::TileIndexOutOfBounds,
            ..
        })
    ));
    // the input value is untouched by construction; a legal move still works
    let idx = index_of(&state, opener, DOUBLE_SIX);
    assert!(apply_move(&state, opener, idx, End::Right).is_ok());
}

#[test]
fn strict_config_rejects_opening_pass() {
    let state = seeded_round(12);
    let strict = EngineConfig {
        pass_policy: PassPolicy::Strict,
        ..EngineConfig::default()
    };
    let err = apply_pass_with(&state, state.opening_seat, &strict).unwrap_err();
    assert!(matches!(
        err,
        EngineError::IllegalMove {
            kind: IllegalMoveKind::PassWithLegalMove,
            ..
        }
    ));
    // permissive (default) lets the opener pass
    let passed = apply_pass(&state, state.opening_seat).unwrap();
    assert_eq!(passed.pass_count, 1);
    assert!(passed.chain.is_empty());
}
