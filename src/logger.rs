//! Diagnostic logging on stderr via `tracing`.
//!
//! Quiet by default (`hdoc=warn`); set `RUST_LOG=hdoc=debug` to trace the
//! pipeline. stdout is left alone so the usage message stays the only thing
//! printed there.

use std::io::IsTerminal;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "hdoc=warn";

/// Install the global subscriber. Call once, before any logging.
pub fn init_logger() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(std::io::stderr().is_terminal())
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
