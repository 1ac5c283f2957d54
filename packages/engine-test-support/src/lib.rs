//! Shared test bootstrap for the domino workspace.
//!
//! - [`logging::init`]: one-time `tracing` setup for unit and integration tests
//! - [`seeds`]: fixed 32-byte seeds so randomized tests are reproducible

pub mod logging;
pub mod seeds;
