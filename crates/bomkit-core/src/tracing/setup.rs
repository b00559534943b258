//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "BOMKIT_LOG";

/// Initialize the bomkit tracing/logging system.
///
/// Reads `BOMKIT_LOG` for per-crate log levels, e.g.
/// `BOMKIT_LOG=bomkit_resolver=debug,bomkit_storage=warn`.
/// Falls back to `bomkit=info` if unset or invalid.
///
/// Idempotent: calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("bomkit=info"));

        // A host process may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
