//! Logging utilities for the Counsel application.
//!
//! Provides a standardized tracing-subscriber setup shared by the binary and
//! by tests that want log output.

use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber with the default level (INFO).
///
/// `RUST_LOG` still takes precedence through the env filter, so operators can
/// raise or lower verbosity per target without a rebuild.
pub fn init() {
    init_with_level(Level::INFO);
}

/// Initialize the tracing subscriber with a specific minimum log level.
pub fn init_with_level(level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},tower_http=info")));

    // try_init: a global subscriber may already be set (e.g. across tests).
    let result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}
