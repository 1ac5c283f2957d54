use domino_engine::domain::{End, Placement};
use domino_engine::select_ai_move;

use crate::support::{seeded_round, tiles};

#[test]
fn opener_always_finds_the_double_six() {
    for tag in 0..16 {
        let state = seeded_round(tag);
        let opener = state.opening_seat;
        let choice = select_ai_move(state.hand(opener), None, None, true).unwrap();
        assert_eq!(choice.end, End::Left);
        for seat in (0..4).filter(|s| *s != opener) {
            assert_eq!(select_ai_move(state.hand(seat), None, None, true), None);
        }
    }
}

#[test]
fn left_match_beats_right_match() {
    let hand = tiles(&[(1, 1), (4, 2), (3, 4)]);
    assert_eq!(
        select_ai_move(&hand, Some(3), Some(2), false),
        Some(Placement::new(2, End::Left))
    );
    assert_eq!(
        select_ai_move(&hand, Some(5), Some(2), false),
        Some(Placement::new(1, End::Right))
    );
    assert_eq!(select_ai_move(&hand, Some(5), Some(6), false), None);
}

#[test]
fn selection_is_deterministic() {
    let hand = tiles(&[(2, 2), (2, 5), (0, 5)]);
    let answers: Vec<_> = (0..8)
        .map(|_| select_ai_move(&hand, Some(5), Some(2), false))
        .collect();
    assert!(answers.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(answers[0], Some(Placement::new(1, End::Left)));
}
