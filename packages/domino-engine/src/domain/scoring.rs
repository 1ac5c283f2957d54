//! Pip totals, blocked-round resolution and round points.

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::domain::state::{RoundEnd, RoundState, Seat, SeatState};
use crate::domain::tiles_types::Tile;

/// Face total of a hand; orientation is irrelevant.
pub fn hand_pips(hand: &[Tile]) -> u16 {
    hand.iter().map(Tile::pips).sum()
}

pub fn pip_totals(seats: &[SeatState; PLAYERS]) -> [u16; PLAYERS] {
    std::array::from_fn(|i| hand_pips(&seats[i].hand))
}

/// Seat with the strictly lowest pip total; equal totals go to the lower index.
pub fn resolve_blocked_winner(seats: &[SeatState; PLAYERS]) -> Seat {
    let totals = pip_totals(seats);
    let mut best = 0usize;
    for (i, &total) in totals.iter().enumerate().skip(1) {
        if total < totals[best] {
            best = i;
        }
    }
    best as Seat
}

/// Points for an ended round: the winner takes the other seats' pips.
///
/// `None` while the round is still running.
pub fn round_points(state: &RoundState) -> Option<(Seat, u16)> {
    let winner = state.winner_seat?;
    let totals = pip_totals(&state.seats);
    let points = totals
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != winner as usize)
        .map(|(_, &p)| p)
        .sum();
    Some((winner, points))
}

/// Running tally across rounds.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub points: [u32; PLAYERS],
    pub wins: [u32; PLAYERS],
    pub rounds: u32,
    pub blocked_rounds: u32,
}

impl Tournament {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold an ended round into the tally. Returns the points awarded, or
    /// `None` (tally unchanged) if the round has not ended.
    pub fn record(&mut self, state: &RoundState) -> Option<(Seat, u16)> {
        let (winner, points) = round_points(state)?;
        self.points[winner as usize] += u32::from(points);
        self.wins[winner as usize] += 1;
        self.rounds += 1;
        if state.end_reason == Some(RoundEnd::Blocked) {
            self.blocked_rounds += 1;
        }
        Some((winner, points))
    }

    /// Seat with the most points; ties go to the lower index.
    pub fn leader(&self) -> Option<Seat> {
        if self.rounds == 0 {
            return None;
        }
        let mut best = 0usize;
        for i in 1..PLAYERS {
            if self.points[i] > self.points[best] {
                best = i;
            }
        }
        Some(best as Seat)
    }
}
