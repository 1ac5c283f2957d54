//! Set construction, shuffling and dealing.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::rules::{DOUBLE_SIX, HAND_SIZE, MAX_PIPS, PLAYERS, SET_SIZE};
use crate::domain::state::{Phase, RoundState, Seat};
use crate::domain::tiles_types::Tile;
use crate::errors::domain::EngineError;

/// The 28-tile double-six set in canonical order (`0-0`, `0-1`, ..., `6-6`).
pub fn create_set() -> Vec<Tile> {
    let mut set = Vec::with_capacity(SET_SIZE);
    for a in 0..=MAX_PIPS {
        for b in a..=MAX_PIPS {
            set.push(Tile::new(a, b));
        }
    }
    set
}

/// Uniform in-place permutation (Fisher-Yates, unbiased index sampling).
pub fn shuffle<R: Rng + ?Sized>(set: &mut [Tile], rng: &mut R) {
    set.shuffle(rng);
}

/// Round-robin partition: tile `i` goes to seat `i % 4`.
pub fn deal(shuffled: &[Tile]) -> [Vec<Tile>; PLAYERS] {
    let mut hands: [Vec<Tile>; PLAYERS] = Default::default();
    for hand in hands.iter_mut() {
        hand.reserve(HAND_SIZE);
    }
    for (i, tile) in shuffled.iter().enumerate() {
        hands[i % PLAYERS].push(*tile);
    }
    hands
}

/// Seat holding the double-six, if any.
pub fn find_opening_seat(hands: &[Vec<Tile>; PLAYERS]) -> Option<Seat> {
    hands
        .iter()
        .position(|h| h.contains(&DOUBLE_SIX))
        .map(|i| i as Seat)
}

/// Deal a round ready for play, redealing until some seat holds the double-six.
///
/// Gives up with `DealFailure` after `max_attempts` deals.
pub fn deal_new_round<R: Rng + ?Sized>(
    rng: &mut R,
    max_attempts: u32,
) -> Result<RoundState, EngineError> {
    deal_until_opener(max_attempts, || {
        let mut set = create_set();
        shuffle(&mut set, &mut *rng);
        deal(&set)
    })
}

/// Retry loop behind [`deal_new_round`], generic over the source of hands.
pub fn deal_until_opener<F>(max_attempts: u32, mut next_hands: F) -> Result<RoundState, EngineError>
where
    F: FnMut() -> [Vec<Tile>; PLAYERS],
{
    for _ in 0..max_attempts {
        let hands = next_hands();
        let Some(opener) = find_opening_seat(&hands) else {
            continue;
        };
        let mut state = RoundState::from_hands(hands);
        state.opening_seat = opener;
        state.current_seat = opener;
        state.phase = Phase::Play;
        return Ok(state);
    }
    Err(EngineError::DealFailure {
        attempts: max_attempts,
    })
}
