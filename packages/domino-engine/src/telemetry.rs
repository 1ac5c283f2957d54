use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// JSON logs on stdout, filtered by `RUST_LOG` (default `info`).
///
/// Call once from a binary's `main`; panics if a global subscriber is
/// already installed.
pub fn init_tracing() {
    init_tracing_with_default("info");
}

/// As [`init_tracing`], with `default_filter` used when `RUST_LOG` is unset.
pub fn init_tracing_with_default(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
