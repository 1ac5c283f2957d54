// Proptest generators for domain types.
// Rounds are generated from seeds so every generated state is a real deal.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::domain::dealing::deal_new_round;
use crate::domain::state::RoundState;
use crate::domain::tiles_types::{End, Tile};

pub fn tile() -> impl Strategy<Value = Tile> {
    (0u8..=6, 0u8..=6).prop_map(|(a, b)| Tile::new(a, b))
}

pub fn end() -> impl Strategy<Value = End> {
    prop_oneof![Just(End::Left), Just(End::Right)]
}

pub fn seed() -> impl Strategy<Value = [u8; 32]> {
    any::<[u8; 32]>()
}

/// A freshly dealt round in play.
pub fn dealt_round() -> impl Strategy<Value = RoundState> {
    seed().prop_filter_map("deal failed", |s| {
        deal_new_round(&mut ChaCha20Rng::from_seed(s), 1).ok()
    })
}

/// Hands of up to 7 distinct tiles.
pub fn hand() -> impl Strategy<Value = Vec<Tile>> {
    proptest::collection::btree_set(tile(), 0..=7).prop_map(|s| s.into_iter().collect())
}
