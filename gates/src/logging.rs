//! Development-time tracing for debugging gate construction and evaluation.
//!
//! The library only emits events (`debug` when a gate is built, `trace` on
//! every evaluation). Installing a subscriber is left to the host; these
//! helpers cover the common stderr setup.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format. Panics if a global subscriber is already
/// installed.
///
/// # Example
/// ```bash
/// RUST_LOG=gates=trace cargo test
/// ```
pub fn init() {
    subscriber().init();
}

/// Like [`init`], but returns `false` instead of panicking when a global
/// subscriber is already installed.
pub fn try_init() -> bool {
    subscriber().try_init().is_ok()
}

fn subscriber() -> impl SubscriberInitExt {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
}
