//! The engine's external operations.
//!
//! Each takes plain data and returns a new value; the caller's state is
//! never modified, so on `Err` the caller still holds the unchanged round.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::ai;
use crate::config::EngineConfig;
use crate::domain::{self, round, End, Pips, Placement, RoundState, Seat};
use crate::errors::domain::EngineError;

/// Deal a round ready for play, using OS entropy.
pub fn deal_new_round(config: &EngineConfig) -> Result<RoundState, EngineError> {
    let mut rng = StdRng::from_os_rng();
    deal_new_round_with(&mut rng, config)
}

/// Deal with a caller-supplied RNG.
pub fn deal_new_round_with<R: Rng + ?Sized>(
    rng: &mut R,
    config: &EngineConfig,
) -> Result<RoundState, EngineError> {
    domain::deal_new_round(rng, config.max_deal_attempts)
}

/// Reproducible deal from a 32-byte seed.
pub fn deal_new_round_seeded(
    seed: [u8; 32],
    config: &EngineConfig,
) -> Result<RoundState, EngineError> {
    let mut rng = ChaCha20Rng::from_seed(seed);
    deal_new_round_with(&mut rng, config)
}

pub fn apply_move(
    state: &RoundState,
    seat: Seat,
    tile_index: usize,
    end: End,
) -> Result<RoundState, EngineError> {
    let mut next = state.clone();
    round::apply_move(&mut next, seat, tile_index, end)?;
    Ok(next)
}

/// Pass under the default (permissive) policy.
pub fn apply_pass(state: &RoundState, seat: Seat) -> Result<RoundState, EngineError> {
    apply_pass_with(state, seat, &EngineConfig::default())
}

pub fn apply_pass_with(
    state: &RoundState,
    seat: Seat,
    config: &EngineConfig,
) -> Result<RoundState, EngineError> {
    let mut next = state.clone();
    round::apply_pass(&mut next, seat, config.pass_policy)?;
    Ok(next)
}

/// The baseline AI's choice for `hand` against the given ends.
pub fn select_ai_move(
    hand: &[domain::Tile],
    left_end: Option<Pips>,
    right_end: Option<Pips>,
    chain_empty: bool,
) -> Option<Placement> {
    ai::select_move(hand, left_end, right_end, chain_empty)
}
