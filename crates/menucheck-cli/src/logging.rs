//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: Once = Once::new();

/// Install a stderr subscriber filtered by `MENUCHECK_LOG`.
///
/// Format: `MENUCHECK_LOG=menucheck=debug,menucheck_fetch=debug`. Falls back
/// to `warn` when unset or invalid. Stdout is left alone so reports and DOT
/// output can be piped.
pub fn init() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("MENUCHECK_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
