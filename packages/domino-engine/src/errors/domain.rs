//! Engine-level error type returned by the pure rules layer.
//!
//! Every variant is a local, recoverable rejection: the operation that
//! produced it did not touch the state it was given. Orchestration code wraps
//! these in `crate::services::ServiceError` together with its own failures.

use thiserror::Error;

use crate::domain::state::{Phase, Seat};
use crate::errors::ErrorCode;

/// Refinement of [`EngineError::IllegalMove`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum IllegalMoveKind {
    /// `tile_index` does not address a tile in the acting seat's hand.
    TileIndexOutOfBounds,
    /// The chain is empty and the tile is not the double-six.
    OpeningRequiresDoubleSix,
    /// Neither face of the tile matches the exposed pips at the chosen end.
    PipMismatch,
    /// Strict pass policy: the seat still holds a playable tile.
    PassWithLegalMove,
    /// The acting seat is not one of the four table seats.
    SeatOutOfRange,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("illegal move ({kind:?}): {detail}")]
    IllegalMove {
        kind: IllegalMoveKind,
        detail: String,
    },
    #[error("out of turn: seat {actual} acted while seat {expected} is to play")]
    OutOfTurn { expected: Seat, actual: Seat },
    #[error("round not in play (phase {phase:?})")]
    RoundNotInPlay { phase: Phase },
    #[error("no valid deal after {attempts} attempts")]
    DealFailure { attempts: u32 },
}

impl EngineError {
    pub fn illegal(kind: IllegalMoveKind, detail: impl Into<String>) -> Self {
        Self::IllegalMove {
            kind,
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            EngineError::IllegalMove { .. } => ErrorCode::IllegalMove,
            EngineError::OutOfTurn { .. } => ErrorCode::OutOfTurn,
            EngineError::RoundNotInPlay { .. } => ErrorCode::RoundNotInPlay,
            EngineError::DealFailure { .. } => ErrorCode::DealFailure,
        }
    }
}

/// A textual tile token (e.g. `"3-5"`) could not be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parse tile: {token:?}")]
pub struct ParseTileError {
    pub token: String,
}

impl ParseTileError {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        ErrorCode::ParseTile
    }
}
