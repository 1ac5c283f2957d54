//! Orchestration layer: sequences the pure rules, runs AI seats and
//! serializes mutations per round.

pub mod round_flow;
pub mod round_store;

use thiserror::Error;

use crate::ai::AiError;
use crate::domain::Seat;
use crate::errors::domain::EngineError;
use crate::errors::ErrorCode;

pub use round_flow::{RoundFlowMutationResult, RoundFlowService};
pub use round_store::{RoundId, RoundStore, StoredRound};

/// Why a mutation was refused before the rules ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Another mutation for the same round is in flight.
    RoundBusy,
    /// The caller's expected version is stale.
    OptimisticLock,
}

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("Not found: round {round_id}")]
    NotFound { round_id: RoundId },
    #[error("Conflict {kind:?}: {detail}")]
    Conflict { kind: ConflictKind, detail: String },
    #[error("AI at seat {seat} failed: {source}")]
    Ai {
        seat: Seat,
        #[source]
        source: AiError,
    },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl ServiceError {
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict {
            kind,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ServiceError::Engine(e) => e.code(),
            ServiceError::NotFound { .. } => ErrorCode::RoundNotFound,
            ServiceError::Conflict {
                kind: ConflictKind::RoundBusy,
                ..
            } => ErrorCode::RoundBusy,
            ServiceError::Conflict {
                kind: ConflictKind::OptimisticLock,
                ..
            } => ErrorCode::OptimisticLock,
            ServiceError::Ai { .. } => ErrorCode::AiFailure,
            ServiceError::Config { .. } => ErrorCode::ConfigError,
        }
    }
}
