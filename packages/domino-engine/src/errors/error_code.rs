//! Error codes for the domino round engine.
//!
//! All error codes are SCREAMING_SNAKE_CASE and are the strings collaborators
//! should surface to clients. Add new codes here; never pass ad-hoc strings.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Rules
    /// Tile does not fit the chain, or bad hand index
    IllegalMove,
    /// Acting seat is not the current seat
    OutOfTurn,
    /// Operation attempted outside the Play phase
    RoundNotInPlay,
    /// Dealing retries exhausted
    DealFailure,
    /// Malformed tile token
    ParseTile,

    // Orchestration
    /// No round registered under the given id
    RoundNotFound,
    /// Another mutation for the same round is in flight
    RoundBusy,
    /// Caller's expected version is stale
    OptimisticLock,
    /// AI seat failed to produce a usable decision
    AiFailure,
    /// Invalid engine configuration
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IllegalMove => "ILLEGAL_MOVE",
            Self::OutOfTurn => "OUT_OF_TURN",
            Self::RoundNotInPlay => "ROUND_NOT_IN_PLAY",
            Self::DealFailure => "DEAL_FAILURE",
            Self::ParseTile => "PARSE_TILE",

            Self::RoundNotFound => "ROUND_NOT_FOUND",
            Self::RoundBusy => "ROUND_BUSY",
            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::AiFailure => "AI_FAILURE",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
