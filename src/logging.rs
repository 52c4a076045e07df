//! Diagnostic logging for the license report tool.
//!
//! Diagnostics go through `tracing` to stderr, leaving stdout and the
//! written report untouched. `log` records (such as actix-web's access log)
//! are forwarded to the same subscriber.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Calling it again only reports the error.
pub fn init_logging() {
    let result = tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_level(true)
                .with_target(false)
                .compact(),
        )
        .try_init();

    if let Err(err) = result {
        eprintln!("Error initializing logging: {err:?}");
    }
}
