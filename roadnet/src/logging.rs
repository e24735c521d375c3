//! Diagnostics for roadnet commands.
//!
//! Graph mutations log at `debug`, map loading at `info`, and skipped or
//! mismatched input at `warn`. All of it goes to stderr, so the towns, roads
//! and path segments a command prints on stdout stay pipeable.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the stderr subscriber. Call once, before loading a map.
///
/// The filter comes from `RUST_LOG` and falls back to `warn`, so skipped
/// road lines surface without any setup:
///
/// ```bash
/// RUST_LOG=roadnet::core::graph=debug roadnet path Baltimore Richmond
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let stderr = fmt::layer().with_writer(std::io::stderr).compact();

    tracing_subscriber::registry().with(filter).with(stderr).init();
}
