use serde::{Deserialize, Serialize};

use crate::domain::chain;
use crate::domain::intent::{Intent, Placement};
use crate::domain::rules::BLOCK_PASSES;
use crate::domain::scoring::resolve_blocked_winner;
use crate::domain::state::{next_seat, Phase, RoundEnd, RoundState, Seat};
use crate::domain::tiles_types::{End, OrientedTile, Pips, Tile};
use crate::errors::domain::{EngineError, IllegalMoveKind};

/// Whether a pass must be justified by having nothing to play.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PassPolicy {
    /// Passing is always allowed while it is the seat's turn.
    #[default]
    Permissive,
    /// Passing with a playable tile is an illegal move.
    Strict,
}

/// What a successful operation did, in table order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RoundAction {
    Played {
        seat: Seat,
        tile: Tile,
        end: End,
        placed: OrientedTile,
    },
    Passed {
        seat: Seat,
    },
}

impl RoundAction {
    pub fn seat(&self) -> Seat {
        match *self {
            RoundAction::Played { seat, .. } | RoundAction::Passed { seat } => seat,
        }
    }
}

/// Every placement of `hand` onto a chain with the given exposed ends.
///
/// Both ends `None` means the chain is empty; the double-six is then listed
/// once, at the left end.
pub fn legal_placements(hand: &[Tile], left: Option<Pips>, right: Option<Pips>) -> Vec<Placement> {
    let mut out = Vec::new();
    for (tile_index, tile) in hand.iter().enumerate() {
        match (left, right) {
            (Some(l), Some(r)) => {
                if tile.has(l) {
                    out.push(Placement::new(tile_index, End::Left));
                }
                if tile.has(r) {
                    out.push(Placement::new(tile_index, End::Right));
                }
            }
            _ => {
                if chain::can_place(*tile, End::Left, &[]) {
                    out.push(Placement::new(tile_index, End::Left));
                }
            }
        }
    }
    out
}

/// Legal placements for `seat`, independent of turn enforcement.
pub fn legal_moves(state: &RoundState, seat: Seat) -> Vec<Placement> {
    if state.phase != Phase::Play {
        return Vec::new();
    }
    let Some(seat_state) = state.seats.get(seat as usize) else {
        return Vec::new();
    };
    legal_placements(&seat_state.hand, state.left_end(), state.right_end())
}

pub fn has_legal_move(state: &RoundState, seat: Seat) -> bool {
    !legal_moves(state, seat).is_empty()
}

fn require_turn(state: &RoundState, seat: Seat) -> Result<(), EngineError> {
    if state.phase != Phase::Play {
        return Err(EngineError::RoundNotInPlay { phase: state.phase });
    }
    if state.seats.get(seat as usize).is_none() {
        return Err(EngineError::illegal(
            IllegalMoveKind::SeatOutOfRange,
            format!("seat {seat}"),
        ));
    }
    if seat != state.current_seat {
        return Err(EngineError::OutOfTurn {
            expected: state.current_seat,
            actual: seat,
        });
    }
    Ok(())
}

fn tile_count(state: &RoundState) -> usize {
    state.all_tiles().count()
}

/// Play `hand[tile_index]` of `seat` at `end`.
///
/// All checks run before the first write, so an `Err` leaves `state` untouched.
pub fn apply_move(
    state: &mut RoundState,
    seat: Seat,
    tile_index: usize,
    end: End,
) -> Result<RoundAction, EngineError> {
    require_turn(state, seat)?;

    let hand = &state.seats[seat as usize].hand;
    let Some(&tile) = hand.get(tile_index) else {
        return Err(EngineError::illegal(
            IllegalMoveKind::TileIndexOutOfBounds,
            format!("index {tile_index}, hand {}", hand.len()),
        ));
    };
    if !chain::can_place(tile, end, &state.chain) {
        let kind = if state.chain.is_empty() {
            IllegalMoveKind::OpeningRequiresDoubleSix
        } else {
            IllegalMoveKind::PipMismatch
        };
        return Err(EngineError::illegal(kind, format!("{tile} at {end:?}")));
    }

    let before = tile_count(state);
    let placed = chain::resolve(tile, end, &state.chain);
    chain::place(&mut state.chain, placed, end);
    let hand = &mut state.seats[seat as usize].hand;
    hand.remove(tile_index);
    let emptied = hand.is_empty();
    state.pass_count = 0;

    if emptied {
        state.phase = Phase::Ended;
        state.winner_seat = Some(seat);
        state.end_reason = Some(RoundEnd::Domino);
    } else {
        state.current_seat = next_seat(seat);
    }

    debug_assert!(chain::is_consistent(&state.chain), "chain broken by {tile}");
    debug_assert_eq!(before, tile_count(state), "tile lost or duplicated");

    Ok(RoundAction::Played {
        seat,
        tile,
        end,
        placed,
    })
}

/// Pass the turn for `seat`. The fourth consecutive pass blocks the round.
pub fn apply_pass(
    state: &mut RoundState,
    seat: Seat,
    policy: PassPolicy,
) -> Result<RoundAction, EngineError> {
    require_turn(state, seat)?;
    if policy == PassPolicy::Strict && has_legal_move(state, seat) {
        return Err(EngineError::illegal(
            IllegalMoveKind::PassWithLegalMove,
            format!("seat {seat} can play"),
        ));
    }

    state.pass_count += 1;
    state.current_seat = next_seat(seat);

    if state.pass_count >= BLOCK_PASSES {
        state.phase = Phase::Ended;
        state.winner_seat = Some(resolve_blocked_winner(&state.seats));
        state.end_reason = Some(RoundEnd::Blocked);
    }

    Ok(RoundAction::Passed { seat })
}

/// Route a typed intent to [`apply_move`] or [`apply_pass`].
pub fn apply_intent(
    state: &mut RoundState,
    intent: &Intent,
    policy: PassPolicy,
) -> Result<RoundAction, EngineError> {
    match *intent {
        Intent::Play {
            seat,
            tile_index,
            end,
        } => apply_move(state, seat, tile_index, end),
        Intent::Pass { seat } => apply_pass(state, seat, policy),
    }
}
