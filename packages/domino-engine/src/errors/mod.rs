//! Error handling for the domino round engine.

pub mod domain;
pub mod error_code;

pub use domain::{EngineError, IllegalMoveKind, ParseTileError};
pub use error_code::ErrorCode;
