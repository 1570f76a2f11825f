//! Diagnostic logging
//!
//! Everything goes to stderr. Stdout carries exactly one JSON line and
//! nothing else may write there.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Default filter for a given `-v` count. `RUST_LOG` overrides it.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global stderr subscriber. Safe to call more than once.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .compact()
        .try_init();
}
