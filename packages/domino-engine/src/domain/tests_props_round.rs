//! Property tests for the round state machine (pure domain).
//!
//! Properties tested:
//! - Closed world holds at every step of a played-out round
//! - The chain stays consistent after every play
//! - Non-terminal operations rotate the turn by one seat
//! - Every round terminates in at most 28 plays plus passes
//! - Rejected operations leave the state untouched

use proptest::prelude::*;
use rand::prelude::*;
use rand_chacha::ChaCha20Rng;

use crate::domain::chain::{can_place, is_consistent};
use crate::domain::round::{apply_move, apply_pass, legal_moves, legal_placements, PassPolicy};
use crate::domain::tiles_types::End;
use crate::domain::rules::{PLAYERS, SET_SIZE};
use crate::domain::state::{next_seat, Phase, RoundEnd};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: random legal play keeps every invariant until the round ends
    #[test]
    fn prop_random_rounds_keep_invariants(
        state in test_gens::dealt_round(),
        choice_seed in any::<u64>(),
    ) {
        let mut state = state;
        let mut rng = ChaCha20Rng::seed_from_u64(choice_seed);
        let mut steps = 0usize;
        while state.phase == Phase::Play {
            prop_assert!(state.is_closed_world());
            let seat = state.current_seat;
            let moves = legal_moves(&state, seat);
            match moves.choose(&mut rng) {
                Some(p) => {
                    apply_move(&mut state, seat, p.tile_index, p.end).unwrap();
                    prop_assert!(is_consistent(&state.chain));
                }
                None => {
                    apply_pass(&mut state, seat, PassPolicy::Strict).unwrap();
                }
            }
            if state.phase == Phase::Play {
                prop_assert_eq!(state.current_seat, next_seat(seat));
            }
            steps += 1;
            prop_assert!(steps <= SET_SIZE * (PLAYERS + 1));
        }
        prop_assert!(state.is_closed_world());
        let winner = state.winner_seat.unwrap();
        match state.end_reason.unwrap() {
            RoundEnd::Domino => prop_assert!(state.hand(winner).is_empty()),
            RoundEnd::Blocked => prop_assert_eq!(state.pass_count, 4),
        }
    }

    /// Property: a tile can open the round iff it is the double-six
    #[test]
    fn prop_opening_only_double_six(tile in test_gens::tile(), end in test_gens::end()) {
        prop_assert_eq!(can_place(tile, end, &[]), tile.a() == 6 && tile.b() == 6);
    }

    /// Property: any seat other than the current one is rejected without change
    #[test]
    fn prop_out_of_turn_is_pure(
        state in test_gens::dealt_round(),
        offset in 1u8..4,
        idx in 0usize..7,
        end in test_gens::end(),
    ) {
        let mut after = state.clone();
        let seat = (state.current_seat + offset) % 4;
        prop_assert!(apply_move(&mut after, seat, idx, end).is_err());
        prop_assert!(apply_pass(&mut after, seat, PassPolicy::Permissive).is_err());
        prop_assert_eq!(after, state);
    }

    /// Property: legal placements are exactly the tile/end pairs that match
    #[test]
    fn prop_legal_placements_match_exposed_ends(
        hand in test_gens::hand(),
        left in 0u8..=6,
        right in 0u8..=6,
    ) {
        let placements = legal_placements(&hand, Some(left), Some(right));
        for p in &placements {
            let pips = if p.end == End::Left { left } else { right };
            prop_assert!(hand[p.tile_index].has(pips));
        }
        let expected: usize = hand
            .iter()
            .map(|t| usize::from(t.has(left)) + usize::from(t.has(right)))
            .sum();
        prop_assert_eq!(placements.len(), expected);
    }
}
