//! RNG seed derivation for reproducible rounds.
//!
//! A tournament carries one 32-byte seed. Each round's deal and each AI seat
//! get independent seeds derived from it with keyed BLAKE3, so replaying the
//! same tournament seed replays every deal and every random AI choice.

use crate::domain::state::Seat;

const DEALING_CONTEXT: &str = "domino-engine round dealing seed v1";
const AI_CONTEXT: &str = "domino-engine ai player seed v1";
const GAME_CONTEXT: &str = "domino-engine game seed from u64 v1";

/// Seed for shuffling the set in round `round_no`.
pub fn derive_dealing_seed(game_seed: &[u8; 32], round_no: u32) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new_derive_key(DEALING_CONTEXT);
    hasher.update(game_seed);
    hasher.update(&round_no.to_le_bytes());
    *hasher.finalize().as_bytes()
}

/// Seed for the AI at `seat` during round `round_no`.
pub fn derive_ai_seed(game_seed: &[u8; 32], round_no: u32, seat: Seat) -> u64 {
    let mut hasher = blake3::Hasher::new_derive_key(AI_CONTEXT);
    hasher.update(game_seed);
    hasher.update(&round_no.to_le_bytes());
    hasher.update(&[seat]);
    let bytes = hasher.finalize();
    let mut head = [0u8; 8];
    head.copy_from_slice(&bytes.as_bytes()[..8]);
    u64::from_le_bytes(head)
}

/// Expand a short numeric seed (e.g. from a CLI flag) into a game seed.
pub fn game_seed_from_u64(seed: u64) -> [u8; 32] {
    let mut hasher = blake3::Hasher::new_derive_key(GAME_CONTEXT);
    hasher.update(&seed.to_le_bytes());
    *hasher.finalize().as_bytes()
}
