use crate::domain::tiles_types::{Pips, Tile};

pub const PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 7;
pub const MAX_PIPS: Pips = 6;
/// Tiles in a double-six set: one per unordered pair `0 <= a <= b <= 6`.
pub const SET_SIZE: usize = 28;

/// The only legal opening tile, and the marker for the opening seat.
pub const DOUBLE_SIX: Tile = Tile::new(MAX_PIPS, MAX_PIPS);

/// Consecutive passes that block the round.
pub const BLOCK_PASSES: u8 = PLAYERS as u8;
