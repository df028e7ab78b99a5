use std::io::{self, IsTerminal};

use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Send diagnostics to stderr, stdout is reserved for the test itself
///
/// `RUST_LOG` directives are applied on top of `level`.
pub fn init_stderr_tracing(level: Option<LevelFilter>) {
    let level = level.unwrap_or(DEFAULT_LEVEL);

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_thread_names(true)
        .init();
}
