// src/logging.rs
use std::io::IsTerminal;

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install the global stderr subscriber.
///
/// `RUST_LOG` takes precedence over `default_level`. Calling this twice is a no-op.
pub fn init(default_level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
