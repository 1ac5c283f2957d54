//! One-time test logging initialization.
//!
//! Level precedence: `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
//! Set `TEST_LOG_FORMAT=json` to get the same JSON lines the binaries emit.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

fn filter() -> EnvFilter {
    std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn wants_json() -> bool {
    std::env::var("TEST_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"))
}

/// Idempotent and race-safe; never panics if a subscriber is already set.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let builder = fmt()
            .with_env_filter(filter())
            .with_test_writer() // cargo/nextest capture
            .without_time();
        if wants_json() {
            builder.json().try_init().ok();
        } else {
            builder.try_init().ok();
        }
    });
}
