use std::io::IsTerminal;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directives for the stderr logger, e.g. `JENV_LOG=debug`.
pub const LOG_VAR: &str = "JENV_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Log to stderr only. Shims forward the target's stdout untouched.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
