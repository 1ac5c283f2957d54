//! AI players: move selectors that act for AI-controlled seats.
//!
//! - [`FirstMatch`]: the deterministic baseline (`select_move`)
//! - [`RandomPlayer`]: uniform among legal moves, seedable
//! - [`HeavyFirst`]: sheds high-pip tiles first
//!
//! All of them see a [`crate::domain::SeatView`] and nothing else.

pub mod config;
mod first_match;
mod heavy_first;
mod random;
pub mod registry;
mod trait_def;

pub use config::AiConfig;
pub use first_match::{select_move, FirstMatch};
pub use heavy_first::HeavyFirst;
pub use random::RandomPlayer;
pub use trait_def::{AiError, AiPlayer};

/// Create an AI player by registry name, seeded from `config` when given.
///
/// Returns `None` if `name` is not registered.
pub fn create_ai(name: &str, config: Option<&AiConfig>) -> Option<Box<dyn AiPlayer>> {
    let factory = registry::by_name(name)?;
    Some((factory.make)(config.and_then(AiConfig::seed)))
}
