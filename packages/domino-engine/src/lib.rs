//! Domino Round Engine: rules, AI and orchestration for four-seat
//! blocking dominoes with the double-six opening rule.

pub mod ai;
pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use config::EngineConfig;
pub use engine::{apply_move, apply_pass, deal_new_round, select_ai_move};
pub use errors::{EngineError, ErrorCode, IllegalMoveKind, ParseTileError};
pub use services::{RoundFlowMutationResult, RoundFlowService, RoundStore, ServiceError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
