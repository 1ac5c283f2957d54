//! Public snapshot for collaborators that render or persist a round.

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::domain::scoring::pip_totals;
use crate::domain::state::{Phase, RoundEnd, RoundState, Seat};
use crate::domain::tiles_types::{OrientedTile, Pips, Tile};

/// Sentinel for an exposed end of an empty chain.
pub const NO_END: i8 = -1;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub phase: Phase,
    pub current_seat: Seat,
    pub opening_seat: Seat,
    pub pass_count: u8,
    pub chain: Vec<OrientedTile>,
    /// Exposed pips, or [`NO_END`].
    pub left_end: i8,
    pub right_end: i8,
    pub hand_counts: [usize; PLAYERS],
    pub ai_seats: [bool; PLAYERS],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewer: Option<ViewerHand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RoundResult>,
}

/// The requesting seat's private hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerHand {
    pub seat: Seat,
    pub hand: Vec<Tile>,
}

/// Outcome, present once the round has ended. Hands are public then.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub winner: Seat,
    pub reason: RoundEnd,
    pub pip_totals: [u16; PLAYERS],
}

fn encode_end(end: Option<Pips>) -> i8 {
    end.map_or(NO_END, |p| p as i8)
}

/// Build the snapshot seen by `viewer` (or by a spectator when `None`).
pub fn snapshot(state: &RoundState, viewer: Option<Seat>) -> RoundSnapshot {
    let result = match (state.phase, state.winner_seat, state.end_reason) {
        (Phase::Ended, Some(winner), Some(reason)) => Some(RoundResult {
            winner,
            reason,
            pip_totals: pip_totals(&state.seats),
        }),
        _ => None,
    };
    RoundSnapshot {
        phase: state.phase,
        current_seat: state.current_seat,
        opening_seat: state.opening_seat,
        pass_count: state.pass_count,
        chain: state.chain.clone(),
        left_end: encode_end(state.left_end()),
        right_end: encode_end(state.right_end()),
        hand_counts: std::array::from_fn(|i| state.seats[i].hand.len()),
        ai_seats: std::array::from_fn(|i| state.seats[i].is_ai),
        viewer: viewer
            .filter(|&s| (s as usize) < PLAYERS)
            .map(|seat| ViewerHand {
                seat,
                hand: state.hand(seat).to_vec(),
            }),
        result,
    }
}
