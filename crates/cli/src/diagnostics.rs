//! Developer diagnostics routed through `tracing`.
//!
//! User-facing sync events never pass through here; they go to the explicit
//! log sink. These diagnostics are off unless `DIRMIRROR_LOG` holds an
//! `EnvFilter` directive such as `dirmirror::walk=trace,debug`.

use std::io;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the diagnostic filter.
pub const LOG_FILTER_ENV: &str = "DIRMIRROR_LOG";

/// Installs a stderr subscriber filtered by [`LOG_FILTER_ENV`].
///
/// Returns `false` when a global subscriber was already installed, which
/// happens when several runs share one process.
pub fn init_diagnostics() -> bool {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    let layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_ansi(false);
    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_ok()
}
