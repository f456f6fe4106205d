//! Subscriber setup for binaries and tests embedding the engine.
//!
//! The library itself only emits `tracing` events; nothing is printed until
//! a subscriber is installed.

use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with the `info` default filter.
///
/// Panics if a global subscriber is already set.
pub fn init() {
    init_with_filter("info");
}

/// Initialize tracing with a custom default filter (RUST_LOG takes precedence).
pub fn init_with_filter(default_filter: &str) {
    subscriber(default_filter).init();
}

/// Like [`init_with_filter`], but returns an error when a subscriber is already set
pub fn try_init_with_filter(
    default_filter: &str,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    subscriber(default_filter).try_init()
}

fn subscriber(default_filter: &str) -> impl SubscriberInitExt {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        let _ = try_init_with_filter("keyfuzz=debug");
        assert!(try_init_with_filter("keyfuzz=debug").is_err());
    }
}
