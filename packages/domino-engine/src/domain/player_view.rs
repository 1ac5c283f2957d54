//! What a single seat may see at its decision point.
//!
//! [`SeatView`] is the only input AI players receive: their own hand, the
//! exposed ends and public counts. Other seats' tiles are never included.
//!
//! Use [`SeatView::legal_moves`] rather than re-deriving the placement rules.

use crate::domain::intent::Placement;
use crate::domain::round::legal_placements;
use crate::domain::rules::PLAYERS;
use crate::domain::state::{Phase, RoundState, Seat};
use crate::domain::tiles_types::{Pips, Tile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatView {
    /// Seat this view belongs to.
    pub seat: Seat,
    pub phase: Phase,
    pub current_seat: Seat,
    /// The seat's own tiles, in hand order. `tile_index` refers to this order.
    pub hand: Vec<Tile>,
    /// `None` while the chain is empty.
    pub left_end: Option<Pips>,
    pub right_end: Option<Pips>,
    pub chain_len: usize,
    /// Tiles left in each seat's hand.
    pub hand_counts: [usize; PLAYERS],
    pub pass_count: u8,
}

impl SeatView {
    pub fn for_seat(state: &RoundState, seat: Seat) -> Self {
        Self {
            seat,
            phase: state.phase,
            current_seat: state.current_seat,
            hand: state.hand(seat).to_vec(),
            left_end: state.left_end(),
            right_end: state.right_end(),
            chain_len: state.chain.len(),
            hand_counts: std::array::from_fn(|i| state.seats[i].hand.len()),
            pass_count: state.pass_count,
        }
    }

    pub fn chain_empty(&self) -> bool {
        self.chain_len == 0
    }

    pub fn is_my_turn(&self) -> bool {
        self.phase == Phase::Play && self.current_seat == self.seat
    }

    /// Placements the seat could make right now.
    pub fn legal_moves(&self) -> Vec<Placement> {
        if self.phase != Phase::Play {
            return Vec::new();
        }
        legal_placements(&self.hand, self.left_end, self.right_end)
    }
}
