//! Static list of selectable AIs.
//!
//! To add one: implement `AiPlayer`, then append an `AiFactory` with a stable
//! `name` and `version`. Keep ordering stable. Constructors must be free of
//! side effects, and the same seed must give the same behavior.

use crate::ai::{AiPlayer, FirstMatch, HeavyFirst, RandomPlayer};

/// Factory definition for constructing AI implementations.
pub struct AiFactory {
    pub name: &'static str,
    pub version: &'static str,
    pub make: fn(seed: Option<u64>) -> Box<dyn AiPlayer>,
}

static AI_FACTORIES: &[AiFactory] = &[
    AiFactory {
        name: FirstMatch::NAME,
        version: FirstMatch::VERSION,
        make: make_first_match,
    },
    AiFactory {
        name: RandomPlayer::NAME,
        version: RandomPlayer::VERSION,
        make: make_random_player,
    },
    AiFactory {
        name: HeavyFirst::NAME,
        version: HeavyFirst::VERSION,
        make: make_heavy_first,
    },
];

pub fn registered_ais() -> &'static [AiFactory] {
    AI_FACTORIES
}

pub fn by_name(name: &str) -> Option<&'static AiFactory> {
    registered_ais().iter().find(|factory| factory.name == name)
}

fn make_first_match(_seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(FirstMatch::new())
}

fn make_random_player(seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(RandomPlayer::new(seed))
}

fn make_heavy_first(_seed: Option<u64>) -> Box<dyn AiPlayer> {
    Box::new(HeavyFirst)
}
