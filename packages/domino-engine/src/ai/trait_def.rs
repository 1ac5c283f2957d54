//! AI player trait definition.

use std::fmt;

use crate::domain::{Placement, SeatView};
use crate::errors::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    Internal(String),
    InvalidMove(String),
}

impl AiError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::AiFailure
    }
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

/// Decision-maker for one seat.
///
/// Implementations see only the acting seat's [`SeatView`]. `Ok(None)` means
/// "pass". `view.legal_moves()` lists one placement per legal choice (the
/// opening double-six only at the left end), but any placement the state
/// machine accepts is allowed. A rejected placement is a bug in the
/// implementation and is surfaced to the caller, never corrected.
pub trait AiPlayer: Send + Sync {
    fn choose_move(&self, view: &SeatView) -> Result<Option<Placement>, AiError>;
}
