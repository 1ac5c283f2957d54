use serde::{Deserialize, Serialize};

use crate::domain::chain;
use crate::domain::rules::{MAX_PIPS, PLAYERS, SET_SIZE};
use crate::domain::tiles_types::{OrientedTile, Pips, Tile};

pub type Seat = u8; // 0..=3

/// Round progression phases. `Ended` is terminal.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Hands dealt, opening seat not yet identified.
    Setup,
    /// Seats act in turn.
    Play,
    /// A seat dominoed or the round blocked.
    Ended,
}

/// How an ended round ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundEnd {
    /// The winner emptied their hand.
    Domino,
    /// Four consecutive passes; lowest pip total wins.
    Blocked,
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SeatState {
    pub hand: Vec<Tile>,
    /// Fixed for the round's lifetime.
    pub is_ai: bool,
}

/// Entire round container, sufficient for pure domain operations.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub seats: [SeatState; PLAYERS],
    /// Oriented tiles, left end first.
    pub chain: Vec<OrientedTile>,
    /// Seat expected to act next.
    pub current_seat: Seat,
    /// Consecutive passes since the last play.
    pub pass_count: u8,
    pub phase: Phase,
    /// Seat that held the double-six at deal time.
    pub opening_seat: Seat,
    /// Set only once `phase == Ended`.
    pub winner_seat: Option<Seat>,
    pub end_reason: Option<RoundEnd>,
}

impl RoundState {
    /// A fresh round in `Setup` with the given hands; no seat is AI.
    pub fn from_hands(hands: [Vec<Tile>; PLAYERS]) -> Self {
        Self {
            seats: hands.map(|hand| SeatState { hand, is_ai: false }),
            chain: Vec::new(),
            current_seat: 0,
            pass_count: 0,
            phase: Phase::Setup,
            opening_seat: 0,
            winner_seat: None,
            end_reason: None,
        }
    }

    pub fn hand(&self, seat: Seat) -> &[Tile] {
        &self.seats[seat as usize].hand
    }

    pub fn left_end(&self) -> Option<Pips> {
        chain::left_end(&self.chain)
    }

    pub fn right_end(&self) -> Option<Pips> {
        chain::right_end(&self.chain)
    }

    pub fn is_ended(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Every tile currently in a hand or on the table.
    pub fn all_tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.seats
            .iter()
            .flat_map(|s| s.hand.iter().copied())
            .chain(self.chain.iter().map(OrientedTile::tile))
    }

    /// Hands plus chain hold each tile of the double-six set exactly once.
    pub fn is_closed_world(&self) -> bool {
        let mut seen = [false; SET_SIZE];
        let mut count = 0usize;
        for tile in self.all_tiles() {
            let Some(idx) = tile_slot(tile) else {
                return false;
            };
            if seen[idx] {
                return false;
            }
            seen[idx] = true;
            count += 1;
        }
        count == SET_SIZE
    }
}

/// Dense index of a tile within the canonical set ordering.
///
/// `None` for faces above `MAX_PIPS`, which no real set contains.
fn tile_slot(tile: Tile) -> Option<usize> {
    if tile.b() > MAX_PIPS {
        return None;
    }
    // Rows of the upper triangle: a contributes 7 + 6 + ... preceding entries.
    let a = tile.a() as usize;
    let b = tile.b() as usize;
    Some(a * 7 - a * (a.saturating_sub(1)) / 2 + (b - a))
}

/// Seat / turn math helpers (4 fixed seats: 0..=3).
///
/// Clockwise direction is positive (+1).
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}
