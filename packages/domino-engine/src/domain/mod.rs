//! Domain layer: pure round rules, no I/O and no logging.

pub mod chain;
pub mod dealing;
pub mod intent;
pub mod player_view;
pub mod round;
pub mod round_transition;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod tiles_parsing;
pub mod tiles_serde;
pub mod tiles_types;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_props_round;

// Re-exports for ergonomics
pub use dealing::{create_set, deal, deal_new_round, find_opening_seat, shuffle};
pub use intent::{Intent, Placement};
pub use player_view::SeatView;
pub use round::{apply_intent, has_legal_move, legal_moves, PassPolicy, RoundAction};
pub use round_transition::{derive_round_transitions, RoundTransition};
pub use rules::{DOUBLE_SIX, HAND_SIZE, PLAYERS, SET_SIZE};
pub use scoring::{resolve_blocked_winner, round_points, Tournament};
pub use seed_derivation::{derive_ai_seed, derive_dealing_seed, game_seed_from_u64};
pub use snapshot::{snapshot, RoundSnapshot};
pub use state::{next_seat, Phase, RoundEnd, RoundState, Seat, SeatState};
pub use tiles_types::{End, OrientedTile, Pips, Tile};
